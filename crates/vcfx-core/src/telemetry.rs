//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Builds the log filter for the configured level directive.
///
/// ## Errors
/// Returns `CoreError::ConfigError` if the directive cannot be parsed.
pub fn build_filter(logging: &LoggingConfig) -> CoreResult<EnvFilter> {
    EnvFilter::try_new(logging.level.as_str()).map_err(|e| {
        CoreError::ConfigError(format!("invalid log level {:?}: {e}", logging.level))
    })
}

/// ## Summary
/// Installs a global fmt subscriber filtered by `logging.level`.
///
/// ## Errors
/// Returns an error if the level is invalid or a global subscriber is already set.
pub fn init_tracing(logging: &LoggingConfig) -> CoreResult<()> {
    let filter = build_filter(logging)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .map_err(|e| CoreError::ConfigError(format!("failed to install subscriber: {e}")))?;

    tracing::debug!(level = %logging.level, "Tracing initialized");

    Ok(())
}
