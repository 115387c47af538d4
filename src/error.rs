//! Error types for googlesignin-fix.
//!
//! All operations return `Result<T>` which aliases `Result<T, FixError>`.

use thiserror::Error;

/// Errors from locate and rewrite operations.
#[derive(Debug, Error)]
pub enum FixError {
    /// Search pattern failed to compile (indicates bug).
    #[error("Glob pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A directory could not be read while expanding the search pattern.
    #[error("Glob error: {0}")]
    Glob(#[from] glob::GlobError),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for googlesignin-fix operations.
pub type Result<T> = std::result::Result<T, FixError>;
