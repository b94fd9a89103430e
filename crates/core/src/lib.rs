//! Sentra domain logic.
//!
//! Pure types and rule evaluation for the environmental alerting service.
//! Nothing in this crate performs I/O; the caller fetches readings and
//! configuration and passes them in.

pub mod error;
pub mod night;
pub mod rules;
pub mod types;

pub use error::CoreError;
pub use night::is_night;
pub use rules::{evaluate, AlertIntent, AlertKind, AlertThresholds, SensorSample};
