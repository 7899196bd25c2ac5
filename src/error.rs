//! Error types for amule-ec
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using EcError
pub type Result<T> = std::result::Result<T, EcError>;

/// Unified error type for EC protocol operations
#[derive(Debug, Error)]
pub enum EcError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    /// A value is outside the representable range of an encoding
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A decoded value violates its tag type's physical contract
    #[error("Format error: {0}")]
    Format(String),

    /// A structural violation of the wire format
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Authentication failed: {0}")]
    Auth(String),
}
