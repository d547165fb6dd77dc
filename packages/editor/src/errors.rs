//! Error types for the editor

use siteframe_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Page '{0}' already exists")]
    DuplicatePage(String),

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("No page selected")]
    NoActivePage,

    #[error("No section selected")]
    NoActiveSection,

    #[error("Unknown entity type: {0}")]
    UnknownEntityType(String),

    #[error("Nothing is being edited")]
    NothingToSave,

    #[error("Cancelled")]
    Cancelled,

    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] serde_json::Error),
}
