//! The notification seam between the pipeline and delivery transports.

use std::sync::Arc;

use sentra_db::models::Alert;

use crate::delivery::email::{EmailConfig, EmailNotifier};

/// Outcome of a single dispatch attempt.
///
/// Dispatch is best-effort and fire-and-forget: the pipeline inspects the
/// outcome to persist the delivery state but never aborts on a failed or
/// skipped send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The message was handed to the transport successfully.
    Sent,
    /// The attempt failed (transport, auth, timeout, or missing settings).
    Failed,
    /// Notification is disabled; no attempt was made.
    Skipped,
}

/// A notification channel for fired alerts.
///
/// Implementations must absorb their own errors: `notify` reports an
/// outcome rather than returning `Result`, so a broken transport can
/// never throw the pipeline off its critical path.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, alert: &Alert) -> DispatchOutcome;
}

/// Notifier used when notification is disabled. Never touches a transport.
pub struct NoopNotifier;

#[async_trait::async_trait]
impl Notifier for NoopNotifier {
    async fn notify(&self, _alert: &Alert) -> DispatchOutcome {
        DispatchOutcome::Skipped
    }
}

/// Notifier used when notification is enabled but the email settings are
/// incomplete. Fails every dispatch immediately, without a network call.
pub struct MisconfiguredNotifier;

#[async_trait::async_trait]
impl Notifier for MisconfiguredNotifier {
    async fn notify(&self, alert: &Alert) -> DispatchOutcome {
        tracing::error!(
            alert_id = alert.id,
            "Email settings are incomplete, alert not delivered"
        );
        DispatchOutcome::Failed
    }
}

/// Select the notifier for the given configuration.
///
/// - disabled → [`NoopNotifier`] (dispatch skipped)
/// - enabled, settings complete → [`EmailNotifier`]
/// - enabled, settings incomplete → [`MisconfiguredNotifier`] (dispatch
///   fails without a transport attempt; alerts are still created)
pub fn notifier_from_config(enabled: bool, config: Option<EmailConfig>) -> Arc<dyn Notifier> {
    if !enabled {
        return Arc::new(NoopNotifier);
    }
    match config {
        Some(config) => Arc::new(EmailNotifier::new(config)),
        None => {
            tracing::warn!("Email notification enabled but settings are incomplete");
            Arc::new(MisconfiguredNotifier)
        }
    }
}
