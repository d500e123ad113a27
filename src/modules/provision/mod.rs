//! Account provisioning module.
//!
//! Idempotent upsert of privileged accounts in the backend's `users` table,
//! plus single-user role promotion. The table itself belongs to the backend;
//! this module only writes rows the backend's login path can consume.

pub mod model;
pub mod service;

pub use model::*;
