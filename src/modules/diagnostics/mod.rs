//! Read-only diagnostic queries over the assignment pipeline.
//!
//! Everything in here is `SELECT` only; the `orders` and `order_assignments`
//! tables are never written by these tools.

pub mod model;
pub mod service;

pub use model::*;
