use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Used when `RUST_LOG` is unset or does not parse, e.g.
/// `RUST_LOG=notify_core=debug` to see registry membership changes.
const DEFAULT_FILTER: &str = "notify_demo=debug,notify_core=info";

#[must_use = "LogGuard must be held to keep logging active"]
#[non_exhaustive]
pub struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

impl LogGuard {
    /// Logs go to stderr so stdout carries only the simulated notifications.
    pub fn init() -> anyhow::Result<Self> {
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stderr());

        tracing_subscriber::registry()
            .with(filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
            .with(fmt::layer().with_writer(non_blocking_writer))
            .try_init()
            .context("failed to init tracing")?;

        Ok(Self { _guard: guard })
    }
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
