//! Error handling for digest generation.

use thiserror::Error;

/// Errors produced while resolving a digest algorithm.
///
/// Computing a digest for an already-resolved [`HashAlgorithm`] is
/// infallible; the only failure is asking for an algorithm this crate
/// does not carry.
///
/// [`HashAlgorithm`]: crate::HashAlgorithm
#[derive(Debug, Error)]
pub enum HashError {
    #[error("unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

/// Result type for digest operations.
pub type Result<T> = std::result::Result<T, HashError>;
