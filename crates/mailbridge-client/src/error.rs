//! Error types for the client library.

use thiserror::Error;

/// Errors that can occur in client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// GAL-sourced contacts are read-only by contract.
    #[error("can't modify GAL contact")]
    GalContactReadOnly,

    /// Attachment lookup with a name the contact does not carry.
    #[error("invalid attachment name: {0}")]
    InvalidAttachment(String),

    /// Tag lookup by a name or id that resolves to nothing.
    #[error("unknown tag: {0}")]
    UnknownTag(String),

    /// Folder lookup by a path or id that resolves to nothing.
    #[error("unknown folder: {0}")]
    UnknownFolder(String),

    /// A wire element was malformed or incomplete.
    #[error("SOAP error: {0}")]
    Soap(#[from] mailbridge_soap::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Failure reported by the request carrier.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
