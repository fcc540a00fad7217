//! Typed error handling for magicnum.
//!
//! Provides structured errors that library consumers can match on,
//! with full context about what went wrong and where.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for magicnum operations.
///
/// This provides typed errors that library consumers can match on,
/// unlike opaque `anyhow::Error` types.
#[derive(Error, Debug)]
pub enum MagicnumError {
    /// The input buffer was empty - there is nothing to rewrite.
    #[error("empty input: no document text supplied")]
    EmptyInput,

    /// No scope-opening brace exists, so there is nowhere to insert
    /// a constant declaration.
    #[error("no insertion anchor: document contains no scope-opening brace")]
    NoInsertionAnchor,

    /// The configured constant-name prefix would leave a digit exposed at
    /// the head of every replacement, so rewritten text would be scanned
    /// as a fresh literal and the session could never finish.
    #[error("invalid constant prefix `{prefix}`: must end with `_` or a letter")]
    InvalidPrefix { prefix: String },

    /// A tracked declaration span no longer matches its declaration text
    /// after a mutation. Offsets are considered corrupt; the session
    /// terminates rather than continuing with stale state.
    #[error("declaration relocation failed for constant `{name}`: tracked span is stale")]
    DeclarationRelocationFailed { name: String },

    /// I/O error when reading/writing files
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl MagicnumError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a relocation error for a named constant.
    pub fn relocation(name: impl Into<String>) -> Self {
        Self::DeclarationRelocationFailed { name: name.into() }
    }

    /// Check if this error is a structural invariant violation inside a
    /// rewrite session (as opposed to an ambient file/config problem).
    pub fn is_session_failure(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::NoInsertionAnchor | Self::DeclarationRelocationFailed { .. }
        )
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for magicnum results.
pub type MagicnumResult<T> = Result<T, MagicnumError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> MagicnumResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> MagicnumResult<T> {
        self.map_err(|e| MagicnumError::io(path, e))
    }
}
