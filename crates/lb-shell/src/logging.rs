//! Diagnostic tracing for the shell.
//!
//! Tracing output is for debugging only and always goes to stderr.  The
//! shell's product output (echoed files, traces, boards) is written to stdout
//! and is unaffected by the filter.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `directives` (from `--log-level`) take precedence over `RUST_LOG`.  With
/// neither set, only warnings are shown.
///
/// # Example
/// ```bash
/// lb-shell --log-level lb_behavior=debug
/// ```
pub fn init(directives: Option<&str>) -> Result<()> {
    let filter = match directives {
        Some(d) => EnvFilter::try_new(d).with_context(|| format!("invalid log filter '{d}'"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
        .context("install tracing subscriber")?;
    Ok(())
}
