//! vitals server library entry.
//!
//! This crate wires the config loader, the metric registry state, the
//! router, and the route handlers into a small HTTP service. It is intended
//! to be consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
