//! Error types for eslint-config-gen.
//!
//! This module defines [`ConfigGenError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! The only domain failure is a missing or unusable tsconfig path: the
//! configuration must never be constructed without one. Everything else
//! (IO while writing output, serializer failures) is wrapped infrastructure.

use thiserror::Error;

/// Core error type for eslint-config-gen operations.
#[derive(Debug, Error)]
pub enum ConfigGenError {
    /// The required tsconfig path is missing, empty, or not valid UTF-8.
    ///
    /// Raised before any configuration value exists; callers must treat it
    /// as fatal to configuration loading.
    #[error("ESLINT_PATH_TSCONFIG must be set to a non-empty tsconfig.json path")]
    TsconfigPathInvalid,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for eslint-config-gen operations.
pub type Result<T> = std::result::Result<T, ConfigGenError>;
