//! Common utilities for the gffgate workspace.
//!
//! This crate provides the shared error type, session configuration and
//! logging setup used by `gffgate-core`.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{GateConfig, LoggingConfig, RegistryConfig, RegistryConfigBuilder};
pub use error::{CommonError, Diagnose, ErrorCategory, ErrorSeverity, Result};
pub use logging::init_logging;
