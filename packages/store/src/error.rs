//! Error types for the content store

use siteframe_common::StorageError;
use siteframe_schema::{Collection, SchemaError};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No {collection} record with id: {id}")]
    NotFound { collection: Collection, id: String },

    #[error("Duplicate {collection} id: {id}")]
    DuplicateId { collection: Collection, id: String },

    #[error("System page cannot be deleted: {0}")]
    SystemPage(String),

    #[error(transparent)]
    Inquiry(#[from] InquiryError),

    #[error(transparent)]
    Media(#[from] MediaError),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MediaError {
    #[error("File too large (Max 2MB): {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InquiryError {
    #[error("Inquiry is invalid: {0}")]
    Invalid(FieldErrors),
}

/// Per-field validation messages, in form order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push((field, message.into()));
    }

    /// Message for `field`, if it failed
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}
