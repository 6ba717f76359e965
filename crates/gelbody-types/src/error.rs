//! Error types for the gelbody engine.
//!
//! All crates return `GelResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the gelbody engine.
#[derive(Debug, Error)]
pub enum GelError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// A mesh description file could not be decoded.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        line: usize,
        message: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A collider query was issued with a contact kind the collider does not support.
    #[error("Unsupported collider: {0}")]
    UnsupportedCollider(String),

    /// The implicit collision system could not be solved.
    #[error("Singular system for node {node}")]
    SingularSystem {
        node: u32,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, GelError>`.
pub type GelResult<T> = Result<T, GelError>;
