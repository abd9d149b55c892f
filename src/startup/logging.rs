//! Logging initialization.
//!
//! Installs the global `tracing` subscriber: an `EnvFilter` (`info` unless
//! `RUST_LOG` overrides the verbosity) and a console fmt layer. The `log`
//! records emitted by actix's `Logger` middleware are bridged into the same
//! subscriber.

use anyhow::Context;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Installs the global subscriber. Call once, before the first log line.
pub fn init_logging() -> anyhow::Result<()> {
    LogTracer::init().context("failed to set logger")?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = Registry::default().with(env_filter).with(fmt::layer());
    set_global_default(subscriber).context("failed to set tracing subscriber")?;

    Ok(())
}
