//! Logging and tracing infrastructure for triage-ai.
//!
//! Structured logging goes through the tracing crate; the subscriber is
//! installed once per process, as text or JSON.

use crate::config::{LogFormat, LoggingConfig};
use std::sync::Once;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

static INIT: Once = Once::new();

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initialize the global tracing subscriber with human-readable output.
///
/// This should be called once at program startup.
/// Subsequent calls are ignored.
pub fn init_tracing() {
    init_tracing_with_filter("info");
}

fn init_tracing_with_filter(default_filter: &str) {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        // try_init: a test harness may already own the global dispatcher
        let _ = tracing_subscriber::registry()
            .with(env_filter(default_filter))
            .with(fmt_layer)
            .try_init();

        info!("triage-ai tracing initialized");
    });
}

/// Initialize tracing with JSON output for structured logging.
pub fn init_tracing_json() {
    init_tracing_json_with_filter("info");
}

fn init_tracing_json_with_filter(default_filter: &str) {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_current_span(true);

        let _ = tracing_subscriber::registry()
            .with(env_filter(default_filter))
            .with(fmt_layer)
            .try_init();

        info!("triage-ai tracing initialized (JSON mode)");
    });
}

/// Initialize tracing from the service configuration.
pub fn init_from_config(config: &LoggingConfig) {
    match config.format {
        LogFormat::Text => init_tracing_with_filter(&config.default_filter),
        LogFormat::Json => init_tracing_json_with_filter(&config.default_filter),
    }
}
