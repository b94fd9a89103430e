//! Alert notification and pipeline orchestration.
//!
//! This crate owns the evaluate → persist → dispatch → persist-delivery-state
//! flow:
//!
//! - [`AlertPipeline`] — processes one reading end to end.
//! - [`Notifier`] / [`DispatchOutcome`] — the best-effort delivery seam;
//!   failures are reported, never propagated.
//! - [`delivery::email`] — SMTP delivery via `lettre`.

pub mod delivery;
pub mod notify;
pub mod pipeline;

pub use delivery::email::{EmailConfig, EmailNotifier};
pub use notify::{notifier_from_config, DispatchOutcome, Notifier};
pub use pipeline::AlertPipeline;
