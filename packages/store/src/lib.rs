//! # Siteframe Store
//!
//! The content store: every collection and singleton the site renders,
//! mirrored to key-value storage.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ Storage (memory / directory)                │
//! └─────────────────────────────────────────────┘
//!          ↓ migrate + rehydrate        ↑ Persister
//! ┌─────────────────────────────────────────────┐
//! │ ContentStore                                │
//! │  - named operations only                    │
//! │  - activity log per mutation                │
//! │  - observers notified per changed key       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ SiteSnapshot → evaluator / editor           │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use siteframe_store::{ContentStore, StoreOptions};
//! use siteframe_common::DirStorage;
//!
//! let storage = Arc::new(DirStorage::open(".siteframe")?);
//! let mut store = ContentStore::open(storage, StoreOptions::default())?;
//! store.toggle_theme()?;
//! ```

mod csv_import;
mod error;
mod inquiry;
mod keys;
mod media;
mod migration;
mod observer;
mod store;

pub use csv_import::{parse_projects_csv, thousands};
pub use error::{FieldErrors, InquiryError, MediaError, StoreError};
pub use inquiry::{InquiryForm, InquiryValidator};
pub use keys::{schema_version_key, StoreKey};
pub use media::{guess_mime, size_label, MediaUpload};
pub use migration::{migrate, CURRENT_SCHEMA_VERSION};
pub use observer::{Persister, StoreObserver};
pub use store::{ContentStore, StoreOptions, ACTIVITY_LOG_CAPACITY};
