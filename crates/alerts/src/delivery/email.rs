//! Email alert delivery via SMTP.
//!
//! [`EmailNotifier`] wraps the `lettre` async SMTP transport to send one
//! plain-text email per alert. Configuration is loaded from environment
//! variables; [`EmailConfig::from_env`] returns `None` unless the host,
//! sender and recipient are all set, signalling that email delivery is not
//! fully configured.

use std::time::Duration;

use sentra_db::models::Alert;

use crate::notify::{DispatchOutcome, Notifier};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),

    /// The send did not complete within the dispatch deadline.
    #[error("Email send timed out after {0:?}")]
    Timeout(Duration),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Upper bound on a single dispatch attempt. Expiry counts as a failure;
/// the pipeline must never hang on a stuck SMTP session.
const SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the SMTP email delivery channel.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Destination address for alert emails.
    pub to_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if any of `SMTP_HOST`, `SMTP_FROM` or `SMTP_TO` is
    /// missing; all three are required for a deliverable configuration.
    /// Credentials are optional — their absence means an unauthenticated
    /// attempt, not a skip.
    ///
    /// | Variable        | Required | Default |
    /// |-----------------|----------|---------|
    /// | `SMTP_HOST`     | yes      | —       |
    /// | `SMTP_PORT`     | no       | `587`   |
    /// | `SMTP_FROM`     | yes      | —       |
    /// | `SMTP_TO`       | yes      | —       |
    /// | `SMTP_USER`     | no       | —       |
    /// | `SMTP_PASSWORD` | no       | —       |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        let from_address = std::env::var("SMTP_FROM").ok()?;
        let to_address = std::env::var("SMTP_TO").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address,
            to_address,
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// EmailNotifier
// ---------------------------------------------------------------------------

/// Sends one alert email per dispatch via SMTP.
pub struct EmailNotifier {
    config: EmailConfig,
}

impl EmailNotifier {
    /// Create a new email notifier with the given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Render the subject line for an alert.
    pub fn subject(alert: &Alert) -> String {
        format!("IoT Alert: {}", alert.alert_kind)
    }

    /// Render the plain-text body for an alert.
    pub fn body(alert: &Alert) -> String {
        format!("{}\n\n Time: {}", alert.message, alert.created_at)
    }

    /// Attempt exactly one send. No retry, no backoff, no queuing.
    async fn send(&self, alert: &Alert) -> Result<(), EmailError> {
        use lettre::{
            message::header::ContentType, transport::smtp::authentication::Credentials,
            AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
        };

        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(self.config.to_address.parse()?)
            .subject(Self::subject(alert))
            .header(ContentType::TEXT_PLAIN)
            .body(Self::body(alert))
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        match tokio::time::timeout(SEND_TIMEOUT, mailer.send(email)).await {
            Ok(result) => {
                result?;
                Ok(())
            }
            Err(_) => Err(EmailError::Timeout(SEND_TIMEOUT)),
        }
    }
}

#[async_trait::async_trait]
impl Notifier for EmailNotifier {
    async fn notify(&self, alert: &Alert) -> DispatchOutcome {
        match self.send(alert).await {
            Ok(()) => {
                tracing::info!(
                    alert_id = alert.id,
                    kind = %alert.alert_kind,
                    to = %self.config.to_address,
                    "Alert email sent"
                );
                DispatchOutcome::Sent
            }
            Err(e) => {
                tracing::error!(alert_id = alert.id, error = %e, "Failed to send alert email");
                DispatchOutcome::Failed
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
