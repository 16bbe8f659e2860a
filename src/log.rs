use std::env;

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

fn env_flag(key: &str) -> bool {
    env::var(key).map_or(false, |var| {
        matches!(var.to_lowercase().as_str(), "true" | "t" | "1")
    })
}

/// Installs a global tracing subscriber reading its filter from `RUST_LOG`.
/// Plausibility warnings surface through tracing, so binaries and tests that
/// embed this crate and bring no subscriber of their own call this once.
pub fn init() {
    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());

    let builder = if env_flag("LOG_PERF") {
        builder.with_span_events(FmtSpan::CLOSE)
    } else {
        builder
    };

    if env_flag("LOG_JSON") {
        builder.json().init();
    } else {
        builder.init();
    };
}
