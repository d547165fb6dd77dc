//! Error types for content model edits

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("Field '{field}' does not exist on {target}")]
    FieldNotFound { target: String, field: String },

    #[error("Field '{field}' is not a list on {target}")]
    NotAList { target: String, field: String },

    #[error("Index {index} out of range for '{field}' (len {len})")]
    IndexOutOfRange {
        field: String,
        index: usize,
        len: usize,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Unknown section type: {0}")]
    UnknownSectionType(String),

    #[error("Expected a JSON object")]
    NotAnObject,
}
