//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the filter directives.
pub const LOG_ENV_VAR: &str = "IZE_LOG";

/// Filter used when `IZE_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "ize=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the ize tracing/logging system with human-readable output.
///
/// Reads `IZE_LOG` for per-module log levels.
/// Format: `IZE_LOG=ize_engine::rules=debug,ize_engine=info`
///
/// Falls back to `ize=info` if `IZE_LOG` is not set or is invalid.
///
/// Idempotent: only the first call of either initializer installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(env_filter())
            .init();
    });
}

/// Same as [`init_tracing`] but emits one JSON object per event.
pub fn init_tracing_json() {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_target(true).with_current_span(true))
            .with(env_filter())
            .init();
    });
}
