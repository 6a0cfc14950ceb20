//! Error types for Outfit operations.
//!
//! This module defines [`OutfitError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Per-tool problems (unresolvable tool, missing toolchain, declined
//!   confirmation, failed installer) are recorded as outcomes, not errors
//! - Use `OutfitError` for configuration and IO problems, and for the
//!   operator aborting the whole run
//! - Use `anyhow::Error` (via `OutfitError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Outfit operations.
#[derive(Debug, Error)]
pub enum OutfitError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Shell command could not be launched or exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The host operating system has no tool catalog.
    #[error("Unsupported system: {os}")]
    UnsupportedPlatform { os: String },

    /// The operator declined the initial confirmation.
    #[error("Installation cancelled")]
    Aborted,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Outfit operations.
pub type Result<T> = std::result::Result<T, OutfitError>;
