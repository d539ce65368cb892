//! Engine configuration read from the environment.

/// Log output format for `telemetry::init_tracing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Telemetry settings.
///
/// Filter precedence: `ARMADA_LOG`, then `RUST_LOG`, then `"info"`.
/// Format: `ARMADA_LOG_FORMAT=json` switches to JSON lines; anything else
/// (or unset) keeps human-readable output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl TelemetryConfig {
    pub fn from_env() -> Self {
        let filter = std::env::var("ARMADA_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());
        let format = match std::env::var("ARMADA_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };
        Self { filter, format }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}
