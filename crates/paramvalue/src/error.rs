//! Error types for the type registry and typed references

use thiserror::Error;

use crate::types::TypeHandle;

/// Main error type for paramvalue operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// A type name is already owned by a different class
    #[error("Type name already registered: {name}")]
    DuplicateTypeName {
        /// The conflicting name
        name: String,
    },

    /// A type name that can never be registered
    #[error("Invalid type name: {0:?}")]
    InvalidTypeName(String),

    /// A handle that does not belong to the registry it was used with
    #[error("Unknown type handle: {0:?}")]
    UnknownType(TypeHandle),

    /// Type mismatch on downcast
    #[error("Type error: expected {expected}, got {got}")]
    TypeMismatch {
        /// Expected type
        expected: String,
        /// Actual type held
        got: String,
    },

    /// A typed reference that holds nothing
    #[error("Empty reference: expected {0}")]
    EmptyReference(String),
}

/// Result type alias for paramvalue operations
pub type Result<T> = std::result::Result<T, ParamError>;
