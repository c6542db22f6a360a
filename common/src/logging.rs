//! Tracing subscriber setup.

use crate::config::LoggingConfig;
use crate::error::{CommonError, Result};

/// Install a global fmt subscriber configured from `config`.
///
/// Fails if the level does not parse or a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = config.max_level()?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(config.ansi)
        .with_target(true)
        .try_init()
        .map_err(|e| {
            CommonError::configuration_error(format!("cannot install tracing subscriber: {e}"))
        })?;
    tracing::debug!(%level, "tracing subscriber installed");
    Ok(())
}
