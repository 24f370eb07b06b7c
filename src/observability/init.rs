//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber for the binary: an
//! `EnvFilter` built from configuration (overridable via `RUST_LOG`) in front
//! of the standard formatting layer writing to stderr, so log lines never mix
//! with the story list on stdout.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable, if set
/// 2. `config.trace_level`, if set
/// 3. Default: `"info"`
///
/// Idempotent: safe to call multiple times, only the first call takes effect.
pub fn init_tracing(config: &Config) {
    let fallback = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
