//! Error types for secrets loading.

use serde_json::Error as SerdeError;
use thiserror::Error;

/// Errors returned while loading the secrets file.
#[derive(Debug, Error)]
pub enum SecretsError {
    /// The secrets file is missing or could not be read.
    #[error("i/o error: {source}")]
    Io {
        /// Source [`std::io::Error`].
        #[from]
        source: std::io::Error,
    },
    /// The secrets file is not a JSON object of string values.
    #[error("parse error: {source}")]
    Parse {
        /// Source [`serde_json::Error`].
        #[from]
        source: SerdeError,
    },
}

impl SecretsError {
    /// Returns `true` when the file could not be opened or read.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` when the file contents failed to parse.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// Result type alias for secrets operations.
pub type SecretsResult<T> = Result<T, SecretsError>;
