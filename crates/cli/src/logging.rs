//! Logging setup
//!
//! Diagnostics go to stderr so the status lines on stdout stay readable.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Selects `pretty` (default) or `json` output
pub const LOG_FORMAT_ENV: &str = "SCANWRAP_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// Anything but `json` (including unset) is pretty
    fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Filter used when `RUST_LOG` is not set
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,scanwrap=debug"
    } else {
        "warn"
    }
}

/// Initialize the global subscriber
///
/// # Environment Variables
///
/// - `RUST_LOG`: overrides the filter entirely
/// - `SCANWRAP_LOG_FORMAT`: `json` for structured logs, anything else for pretty
pub fn init(verbose: bool) -> Result<()> {
    let log_format = LogFormat::from_env_value(std::env::var(LOG_FORMAT_ENV).ok().as_deref());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbose)))
        .context("Failed to create env filter")?;

    match log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
    }
    .context("Failed to install tracing subscriber")?;

    Ok(())
}
