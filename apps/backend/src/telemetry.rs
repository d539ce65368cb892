use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{LogFormat, TelemetryConfig};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the global tracing subscriber. Idempotent; embedders with their
/// own subscriber simply never call this.
pub fn init_tracing(config: &TelemetryConfig) {
    INITIALIZED.get_or_init(|| {
        let env_filter =
            EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

        match config.format {
            LogFormat::Json => {
                let fmt_layer = fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_ansi(false)
                    .json();
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt_layer)
                    .try_init()
                    .ok();
            }
            LogFormat::Pretty => {
                let fmt_layer = fmt::layer().with_target(false);
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt_layer)
                    .try_init()
                    .ok();
            }
        }
    });
}
