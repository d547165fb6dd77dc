//! # Change Observers
//!
//! The store never writes to storage inline. After each named operation it
//! notifies its observers once per changed [`StoreKey`]; the [`Persister`]
//! observer mirrors that slice into key-value storage.

use crate::keys::StoreKey;
use siteframe_common::{Storage, StorageError};
use siteframe_schema::SiteSnapshot;
use std::sync::Arc;
use tracing::debug;

/// Receives a notification for every changed slice of the snapshot
pub trait StoreObserver: Send {
    fn on_change(&self, snapshot: &SiteSnapshot, key: StoreKey) -> Result<(), StorageError>;
}

/// Writes changed slices to key-value storage
pub struct Persister {
    storage: Arc<dyn Storage>,
    prefix: String,
}

impl Persister {
    pub fn new(storage: Arc<dyn Storage>, prefix: impl Into<String>) -> Self {
        Self {
            storage,
            prefix: prefix.into(),
        }
    }
}

impl StoreObserver for Persister {
    fn on_change(&self, snapshot: &SiteSnapshot, key: StoreKey) -> Result<(), StorageError> {
        let name = key.storage_key(&self.prefix);
        let value = key.encode(snapshot)?;
        debug!(key = %name, bytes = value.len(), "persisting");
        self.storage.set(&name, &value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteframe_common::MemoryStorage;
    use siteframe_schema::{Collection, Theme};

    #[test]
    fn test_persister_writes_one_key() {
        let storage = MemoryStorage::new();
        let persister = Persister::new(Arc::new(storage.clone()), "t_");

        let mut snapshot = SiteSnapshot::seeded();
        snapshot.theme = Theme::Dark;

        persister
            .on_change(&snapshot, StoreKey::Collection(Collection::Pages))
            .unwrap();
        persister.on_change(&snapshot, StoreKey::Theme).unwrap();

        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
        assert!(storage.get("t_pages").unwrap().unwrap().contains("projects_hub"));
    }
}
