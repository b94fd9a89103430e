//! HTTP layer for the Sentra alerting service.
//!
//! Accepts sensor readings, runs them through the alert pipeline, and
//! exposes read-only listing endpoints for readings, alerts and the
//! reconstructed email log.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
