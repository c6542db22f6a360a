//! Configuration for gffgate sessions.
//!
//! A session is configured from a JSON document; every field is optional and
//! falls back to its default:
//!
//! ```json
//! {
//!   "logging": { "level": "debug", "ansi": false },
//!   "registry": {
//!     "default_status": false,
//!     "operations": { "EHselect": true, "ListTypes": true }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CommonError, Result};

/// Top-level session configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub logging: LoggingConfig,
    pub registry: RegistryConfig,
}

impl GateConfig {
    /// Parse a configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            CommonError::deserialization_error_with_source("invalid gffgate configuration", e)
        })
    }

    /// Read and parse a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CommonError::io_error_with_source(
                format!("cannot read configuration file {}", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&contents)
    }

    /// Render the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            CommonError::serialization_error_with_source("cannot encode gffgate configuration", e)
        })
    }
}

/// Logging subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level emitted: trace, debug, info, warn or error.
    pub level: String,
    /// Colored output.
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// The configured level as a `tracing::Level`.
    pub fn max_level(&self) -> Result<tracing::Level> {
        tracing::Level::from_str(self.level.trim()).map_err(|e| {
            CommonError::configuration_error_with_source(
                format!("unknown logging level '{}'", self.level),
                e,
            )
        })
    }
}

/// Initial status of the operations in a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Status of every operation not listed in `operations`.
    pub default_status: bool,
    /// Status per operation name.
    pub operations: BTreeMap<String, bool>,
}

impl RegistryConfig {
    /// Status for `name`, falling back to `default_status`.
    pub fn status_for(&self, name: &str) -> bool {
        self.operations
            .get(name)
            .copied()
            .unwrap_or(self.default_status)
    }

    /// Names listed explicitly in the configuration.
    pub fn listed_names(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }
}

/// Builder for [`RegistryConfig`].
#[derive(Debug, Default)]
pub struct RegistryConfigBuilder {
    config: RegistryConfig,
}

impl RegistryConfigBuilder {
    /// Create a builder where every operation starts disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status of operations that are not listed explicitly.
    pub fn default_status(mut self, status: bool) -> Self {
        self.config.default_status = status;
        self
    }

    /// Mark `name` as enabled.
    pub fn enable(self, name: impl Into<String>) -> Self {
        self.status(name, true)
    }

    /// Mark `name` as disabled.
    pub fn disable(self, name: impl Into<String>) -> Self {
        self.status(name, false)
    }

    /// Set the status of `name`.
    pub fn status(mut self, name: impl Into<String>, status: bool) -> Self {
        self.config.operations.insert(name.into(), status);
        self
    }

    pub fn build(self) -> RegistryConfig {
        self.config
    }
}
