use sentra_alerts::EmailConfig;
use sentra_core::rules::AlertThresholds;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables. This is an
/// immutable snapshot per process lifetime; there is no hot reload.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Human-readable service name, reported by the banner endpoint.
    pub app_name: String,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `9000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Rule thresholds and the night window for motion alerts.
    pub thresholds: AlertThresholds,
    /// Whether alert emails should be sent at all.
    pub email_enabled: bool,
    /// SMTP settings; `None` when not fully configured.
    pub email: Option<EmailConfig>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default             |
    /// |---------------------------|---------------------|
    /// | `APP_NAME`                | `Sentra IoT Alerts` |
    /// | `HOST`                    | `0.0.0.0`           |
    /// | `PORT`                    | `9000`              |
    /// | `CORS_ORIGINS`            | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                |
    /// | `TEMP_HIGH_THRESHOLD`     | `28.0`              |
    /// | `HUMIDITY_LOW_THRESHOLD`  | `30.0`              |
    /// | `HUMIDITY_HIGH_THRESHOLD` | `70.0`              |
    /// | `NIGHT_START_HOUR`        | `22`                |
    /// | `NIGHT_END_HOUR`          | `6`                 |
    /// | `ALERTS_EMAIL_ENABLED`    | `false`             |
    ///
    /// SMTP settings are documented on [`EmailConfig::from_env`].
    pub fn from_env() -> Self {
        let app_name =
            std::env::var("APP_NAME").unwrap_or_else(|_| "Sentra IoT Alerts".into());

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "9000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let defaults = AlertThresholds::default();
        let thresholds = AlertThresholds {
            temp_high: env_f64("TEMP_HIGH_THRESHOLD", defaults.temp_high),
            humidity_low: env_f64("HUMIDITY_LOW_THRESHOLD", defaults.humidity_low),
            humidity_high: env_f64("HUMIDITY_HIGH_THRESHOLD", defaults.humidity_high),
            night_start_hour: env_u32("NIGHT_START_HOUR", defaults.night_start_hour),
            night_end_hour: env_u32("NIGHT_END_HOUR", defaults.night_end_hour),
        };

        let email_enabled = std::env::var("ALERTS_EMAIL_ENABLED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            app_name,
            host,
            port,
            cors_origins,
            request_timeout_secs,
            thresholds,
            email_enabled,
            email: EmailConfig::from_env(),
        }
    }
}

fn env_f64(name: &str, default: f64) -> f64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
