use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,logpuzzle=info";

/// Initialize structured logging to stderr.
///
/// Stdout is reserved for the URL list, so every event goes to stderr. The
/// filter comes from `RUST_LOG` when set.
pub fn init_logging() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {}", err))?;

    tracing::debug!("logpuzzle logging initialized");

    Ok(())
}
