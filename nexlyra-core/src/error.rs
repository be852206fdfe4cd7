//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Validation error (bad setting key, malformed request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Storage layer error (settings store unreachable)
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The content surface rejected or aborted a load.
    ///
    /// Callers on the navigation path swallow this variant; it exists so
    /// adapters can report the abort without inventing a fake success.
    #[error("Navigation aborted: {0}")]
    NavigationAborted(String),
}

impl CoreError {
    /// Whether this is expected behavior (user input, stale navigation),
    /// used for log level classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::NavigationAborted(_)
        )
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
