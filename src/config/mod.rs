//! Configuration for the operational tools.
//!
//! Each submodule owns one concern and loads from environment variables with
//! workable local-dev defaults. Components take these structs at
//! construction; nothing reads the environment after startup.
//!
//! - [`api`]: base URL and timeout for the REST API prober
//! - [`database`]: PostgreSQL connection settings

pub mod api;
pub mod database;
