//! Error types for the user store.
//!
//! All errors are strongly typed and propagated without panicking.
//! Token material is never included in error messages.

/// Store error types covering construction and all four operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A read was attempted with no record present. Recoverable: treat as
    /// "no cached session".
    #[error("No stored user found: {0}")]
    NotFound(String),

    /// Bytes are present at the record path but do not parse as a stored
    /// user record.
    #[error("Stored user record is corrupt: {0}")]
    Corrupt(String),

    /// The platform's per-user application-data root could not be resolved.
    #[error("Application data directory could not be resolved")]
    DataDir,

    /// The record could not be serialized at save time.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Underlying filesystem failure on any operation, including directory
    /// creation at construction.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, StoreError>;
