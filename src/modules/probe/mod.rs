//! Endpoint probing module.
//!
//! Issues fixed sequences of HTTP requests against the backend's REST API,
//! one at a time, and captures what each one observed. Failures are local to
//! a request; the sequence always runs to the end. An auto-assign probe may
//! mutate remote order state when it succeeds — running these against a live
//! system is the point.

pub mod model;
pub mod scenarios;
pub mod service;

pub use model::*;
pub use service::Prober;
