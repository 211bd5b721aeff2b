//! Error types for the variant-config library.
//!
//! The merge core (normalization, parsing, resolution, registry lookup) is
//! total and never fails. Errors only arise at the edges: loading registry
//! documents and strict validation of what the embedding application
//! registered.

use thiserror::Error;

/// Result type alias for operations that may fail with a variant-config error.
///
/// # Examples
///
/// ```
/// use variant_config::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the variant-config library.
#[derive(Debug, Error)]
pub enum Error {
    /// A YAML registry document could not be parsed.
    #[error("configuration document error: {0}")]
    Document(#[from] serde_yaml::Error),

    /// A JSON registry document could not be parsed.
    #[error("JSON document error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred while reading a registry document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A registry document parsed but does not have the expected shape.
    #[error("invalid configuration document: {reason}")]
    InvalidDocument {
        /// Why the document was rejected.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration entry was registered for a type no schema declares.
    #[error("unknown component type '{type_name}'")]
    UnknownComponentType {
        /// The registered type name.
        type_name: String,
    },
}
