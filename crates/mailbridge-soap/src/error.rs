//! Error types for the wire element layer.

use thiserror::Error;

/// Errors that can occur while reading or building wire elements.
#[derive(Debug, Error)]
pub enum Error {
    /// A required attribute was absent.
    #[error("missing required attribute '{name}' on <{element}>")]
    MissingAttribute {
        /// Name of the element that was inspected.
        element: String,
        /// Name of the absent attribute.
        name: String,
    },

    /// An attribute was present but its value could not be interpreted.
    #[error("invalid value '{value}' for attribute '{name}' on <{element}>")]
    InvalidAttribute {
        /// Name of the element that was inspected.
        element: String,
        /// Name of the offending attribute.
        name: String,
        /// The raw attribute value.
        value: String,
    },

    /// A required child element was absent.
    #[error("missing required element <{name}> in <{parent}>")]
    MissingElement {
        /// Name of the parent element that was inspected.
        parent: String,
        /// Name of the absent child element.
        name: String,
    },

    /// A message was deserialized from an element with the wrong name.
    #[error("expected element <{expected}>, found <{found}>")]
    UnexpectedElement {
        /// The root name the message type requires.
        expected: String,
        /// The name actually carried by the element.
        found: String,
    },

    /// XML syntax or encoding error from the underlying codec.
    #[error("malformed XML: {0}")]
    Xml(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
