//! Diagnostic logging setup.
//!
//! Logs go to a separate sink (stderr in the binary) so the stdout
//! transcript is never interleaved with log lines.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Compose a `tracing` subscriber: an `EnvFilter` read from `RUST_LOG`
/// (falling back to `env_filter`) plus a plain `fmt` layer writing to `sink`.
pub fn get_subscriber<Sink>(env_filter: &str, sink: Sink) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(sink);
    Registry::default().with(env_filter).with(formatting_layer)
}

/// Register a subscriber as global default. A second registration is
/// ignored, so tests may call this freely.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("global tracing subscriber already set");
    }
}
