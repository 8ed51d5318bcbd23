//! Error types for exponent set construction and persistence.

use thiserror::Error;

/// Errors that can occur when building or decoding an exponent set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExponentSetError {
    #[error("Invalid exponent 0 for element {element}")]
    InvalidExponent { element: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ExponentSetError {
    fn from(err: serde_json::Error) -> Self {
        ExponentSetError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ExponentSetError>;
