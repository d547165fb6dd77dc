//! # Content Store
//!
//! Single source of truth for everything the site renders. The store owns a
//! [`SiteSnapshot`] and exposes only named operations; each one:
//!
//! 1. mutates the in-memory snapshot
//! 2. appends one activity log entry (newest first, capped)
//! 3. notifies observers once per changed [`StoreKey`]
//!
//! Persistence is one of those observers ([`Persister`]), installed by
//! [`ContentStore::open`].

use crate::error::StoreError;
use crate::inquiry::InquiryValidator;
use crate::keys::{parse_theme, StoreKey};
use crate::migration;
use crate::observer::{Persister, StoreObserver};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use siteframe_common::{read_json, IdGenerator, MemoryStorage, Storage, StorageError};
use siteframe_schema::{
    merge_object, ActivityEntry, Collection, PageDocument, Record, SiteSnapshot, Theme,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Maximum retained activity log entries
pub const ACTIVITY_LOG_CAPACITY: usize = 50;

/// Store settings
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Prefix for every storage key except the theme preference
    pub key_prefix: String,
    /// Name recorded as the actor of logged actions
    pub user: String,
    /// Upper bound for media uploads, in bytes
    pub max_upload_bytes: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            key_prefix: "myploti_".to_string(),
            user: "Admin".to_string(),
            max_upload_bytes: 2_000_000,
        }
    }
}

pub struct ContentStore {
    snapshot: SiteSnapshot,
    storage: Arc<dyn Storage>,
    options: StoreOptions,
    observers: Vec<Box<dyn StoreObserver>>,
    pub(crate) ids: IdGenerator,
    pub(crate) validator: InquiryValidator,
}

impl ContentStore {
    /// Open a store over `storage`: migrate, rehydrate, then persist on change
    #[instrument(skip(storage, options), fields(prefix = %options.key_prefix))]
    pub fn open(storage: Arc<dyn Storage>, options: StoreOptions) -> Result<Self, StoreError> {
        let from = migration::migrate(storage.as_ref(), &options.key_prefix)?;
        debug!(from, "schema version checked");

        let snapshot = load_snapshot(storage.as_ref(), &options.key_prefix)?;
        info!(
            pages = snapshot.pages.len(),
            projects = snapshot.projects.len(),
            "content store loaded"
        );

        let persister = Persister::new(storage.clone(), options.key_prefix.clone());
        Ok(Self {
            snapshot,
            storage,
            options,
            observers: vec![Box::new(persister)],
            ids: IdGenerator::new(),
            validator: InquiryValidator::new()?,
        })
    }

    /// Fresh store over private in-memory storage
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::open(Arc::new(MemoryStorage::new()), StoreOptions::default())
    }

    /// Replace the id generator (deterministic ids for tests and replays)
    pub fn with_id_generator(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    pub fn snapshot(&self) -> &SiteSnapshot {
        &self.snapshot
    }

    pub(crate) fn snapshot_mut(&mut self) -> &mut SiteSnapshot {
        &mut self.snapshot
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Look up a record by id
    pub fn get<T: Record>(&self, id: &str) -> Option<&T> {
        T::select(&self.snapshot).iter().find(|item| item.id() == id)
    }

    /// Add a record. An empty id is replaced by a fresh timestamp id.
    ///
    /// New records go to the front of their collection, except knowledge
    /// base entries, which are appended.
    pub fn insert<T: Record>(&mut self, mut item: T) -> Result<String, StoreError> {
        if item.id().is_empty() {
            item.set_id(self.ids.new_id(""));
        }
        let id = item.id().to_string();
        if self.get::<T>(&id).is_some() {
            return Err(StoreError::DuplicateId {
                collection: T::COLLECTION,
                id,
            });
        }

        let items = T::select_mut(&mut self.snapshot);
        if T::COLLECTION == Collection::KnowledgeBase {
            items.push(item);
        } else {
            items.insert(0, item);
        }
        debug!(collection = %T::COLLECTION, id = %id, "record inserted");

        self.log_activity("Create", T::COLLECTION.module_name(), "Created new item");
        self.commit(&[StoreKey::Collection(T::COLLECTION)])?;
        Ok(id)
    }

    /// Shallow-merge `patch` into the record with `id`.
    ///
    /// The merged record must still decode as `T`. A missing id changes
    /// nothing but is still logged.
    pub fn update<T: Record>(&mut self, id: &str, patch: &Map<String, Value>) -> Result<(), StoreError> {
        let items = T::select_mut(&mut self.snapshot);
        if let Some(slot) = items.iter_mut().find(|item| item.id() == id) {
            let mut projected = serde_json::to_value(&*slot)?;
            merge_object(&mut projected, patch)?;
            let mut merged: T = serde_json::from_value(projected)?;
            merged.set_id(id.to_string());
            *slot = merged;
        } else {
            warn!(collection = %T::COLLECTION, id, "update of missing record");
        }

        self.log_activity(
            "Update",
            T::COLLECTION.module_name(),
            &format!("Updated item ID: {}", id),
        );
        self.commit(&[StoreKey::Collection(T::COLLECTION)])
    }

    /// Remove the record with `id`. System pages are refused.
    pub fn remove<T: Record>(&mut self, id: &str) -> Result<(), StoreError> {
        if T::COLLECTION == Collection::Pages && self.snapshot.page(id).is_some_and(|p| p.is_system) {
            return Err(StoreError::SystemPage(id.to_string()));
        }

        T::select_mut(&mut self.snapshot).retain(|item| item.id() != id);

        self.log_activity(
            "Delete",
            T::COLLECTION.module_name(),
            &format!("Deleted item ID: {}", id),
        );
        self.commit(&[StoreKey::Collection(T::COLLECTION)])
    }

    pub fn update_site_config(&mut self, patch: &Map<String, Value>) -> Result<(), StoreError> {
        self.snapshot.site_config = merged(&self.snapshot.site_config, patch)?;
        self.log_activity("Update", "Config", "Updated global site configuration");
        self.commit(&[StoreKey::SiteConfig])
    }

    pub fn update_global_design(&mut self, patch: &Map<String, Value>) -> Result<(), StoreError> {
        self.snapshot.global_design = merged(&self.snapshot.global_design, patch)?;
        self.log_activity("Update", "Design", "Updated global design system");
        self.commit(&[StoreKey::GlobalDesign])
    }

    pub fn add_page(&mut self, page: PageDocument) -> Result<String, StoreError> {
        self.insert(page)
    }

    /// Mutate a page through `edit`. Nothing is stored if `edit` fails.
    pub fn edit_page<F, R, E>(&mut self, id: &str, edit: F) -> Result<R, E>
    where
        F: FnOnce(&mut PageDocument) -> Result<R, E>,
        E: From<StoreError>,
    {
        let mut draft = self
            .snapshot
            .page(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                collection: Collection::Pages,
                id: id.to_string(),
            })?;

        let result = edit(&mut draft)?;

        if let Some(slot) = self.snapshot.page_mut(id) {
            *slot = draft;
        }
        self.log_activity("Update", "Pages", &format!("Updated item ID: {}", id));
        self.commit(&[StoreKey::Collection(Collection::Pages)])?;
        Ok(result)
    }

    pub fn delete_page(&mut self, id: &str) -> Result<(), StoreError> {
        self.remove::<PageDocument>(id)
    }

    pub fn theme(&self) -> Theme {
        self.snapshot.theme
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, StoreError> {
        self.snapshot.theme = self.snapshot.theme.toggled();
        self.commit(&[StoreKey::Theme])?;
        Ok(self.snapshot.theme)
    }

    /// Clear storage and return to first-run content
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.storage.clear()?;
        migration::write_version(self.storage.as_ref(), &self.options.key_prefix)?;
        self.snapshot = SiteSnapshot::seeded();
        info!("content store reset to seed data");
        self.commit(&StoreKey::all())
    }

    /// Record one admin action, newest first
    pub(crate) fn log_activity(&mut self, action: &str, module: &str, details: &str) {
        let entry = ActivityEntry {
            id: self.ids.new_id(""),
            action: action.to_string(),
            module: module.to_string(),
            details: details.to_string(),
            timestamp: chrono::Local::now().format("%d/%m/%Y, %H:%M:%S").to_string(),
            user: self.options.user.clone(),
        };
        let log = &mut self.snapshot.activity;
        log.insert(0, entry);
        log.truncate(ACTIVITY_LOG_CAPACITY);
    }

    /// Notify observers of changed keys. The activity log is always included.
    pub(crate) fn commit(&self, keys: &[StoreKey]) -> Result<(), StoreError> {
        let activity = StoreKey::Collection(Collection::Activity);
        let mut changed = keys.to_vec();
        if !changed.contains(&activity) {
            changed.push(activity);
        }

        for key in &changed {
            for observer in &self.observers {
                observer.on_change(&self.snapshot, *key)?;
            }
        }
        Ok(())
    }
}

fn merged<T>(current: &T, patch: &Map<String, Value>) -> Result<T, StoreError>
where
    T: serde::Serialize + DeserializeOwned,
{
    let mut projected = serde_json::to_value(current)?;
    merge_object(&mut projected, patch)?;
    Ok(serde_json::from_value(projected)?)
}

fn load_snapshot(storage: &dyn Storage, prefix: &str) -> Result<SiteSnapshot, StoreError> {
    let seed = SiteSnapshot::seeded();
    let key = |k: StoreKey| k.storage_key(prefix);
    let col = |c: Collection| StoreKey::Collection(c).storage_key(prefix);

    let theme = match storage.get(&key(StoreKey::Theme))? {
        Some(raw) => parse_theme(&raw).unwrap_or(seed.theme),
        None => seed.theme,
    };

    Ok(SiteSnapshot {
        projects: load_records(storage, &col(Collection::Projects), seed.projects)?,
        houses: load_records(storage, &col(Collection::Houses), seed.houses)?,
        team: load_records(storage, &col(Collection::Team), seed.team)?,
        portfolio: load_records(storage, &col(Collection::Portfolio), seed.portfolio)?,
        testimonials: load_records(storage, &col(Collection::Testimonials), seed.testimonials)?,
        partners: load_records(storage, &col(Collection::Partners), seed.partners)?,
        stats: load_records(storage, &col(Collection::Stats), seed.stats)?,
        faqs: load_records(storage, &col(Collection::Faqs), seed.faqs)?,
        inquiries: load_records(storage, &col(Collection::Inquiries), seed.inquiries)?,
        knowledge_base: load_records(storage, &col(Collection::KnowledgeBase), seed.knowledge_base)?,
        site_config: load_or(storage, &key(StoreKey::SiteConfig), seed.site_config)?,
        global_design: load_or(storage, &key(StoreKey::GlobalDesign), seed.global_design)?,
        pages: load_records(storage, &col(Collection::Pages), seed.pages)?,
        media: load_records(storage, &col(Collection::Media), seed.media)?,
        activity: load_records(storage, &col(Collection::Activity), seed.activity)?,
        theme,
    })
}

/// Stored value for `key`, or `fallback` when absent, null or unreadable
fn load_or<T: DeserializeOwned>(storage: &dyn Storage, key: &str, fallback: T) -> Result<T, StoreError> {
    match read_json::<Option<T>>(storage, key) {
        Ok(Some(Some(value))) => Ok(value),
        Ok(_) => Ok(fallback),
        Err(StorageError::Json(e)) => {
            warn!(key, error = %e, "error loading state, using defaults");
            Ok(fallback)
        }
        Err(e) => Err(e.into()),
    }
}

/// Stored collection for `key`, decoded one record at a time.
///
/// A record that no longer decodes is skipped with a warning; the rest of
/// the collection still loads. Only a key that is absent, null or not a JSON
/// array falls back to `fallback`.
fn load_records<T: DeserializeOwned>(
    storage: &dyn Storage,
    key: &str,
    fallback: Vec<T>,
) -> Result<Vec<T>, StoreError> {
    let items = match read_json::<Option<Vec<Value>>>(storage, key) {
        Ok(Some(Some(items))) => items,
        Ok(_) => return Ok(fallback),
        Err(StorageError::Json(e)) => {
            warn!(key, error = %e, "error loading state, using defaults");
            return Ok(fallback);
        }
        Err(e) => return Err(e.into()),
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(key, index, error = %e, "skipping unreadable record");
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use siteframe_schema::{Stat, TeamMember};

    fn store() -> ContentStore {
        ContentStore::in_memory()
            .unwrap()
            .with_id_generator(IdGenerator::sequential(1_000))
    }

    fn patch(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_insert_prepends_and_logs() {
        let mut store = store();
        let id = store
            .insert(TeamMember {
                name: "Ann".to_string(),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(id, "1000");
        assert_eq!(store.snapshot().team[0].name, "Ann");

        let entry = &store.snapshot().activity[0];
        assert_eq!(entry.action, "Create");
        assert_eq!(entry.module, "Team");
        assert_eq!(entry.user, "Admin");
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut store = store();
        let err = store
            .insert(Stat {
                id: "1".to_string(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId { .. }));
    }

    #[test]
    fn test_update_shallow_merges() {
        let mut store = store();
        store.update::<Stat>("2", &patch(json!({ "value": "2000+" }))).unwrap();

        let stat = store.get::<Stat>("2").unwrap();
        assert_eq!(stat.value, "2000+");
        assert_eq!(stat.label, "Happy Clients");
    }

    #[test]
    fn test_update_rejects_wrong_shape() {
        let mut store = store();
        let before = store.snapshot().stats.clone();
        let result = store.update::<Stat>("2", &patch(json!({ "value": [1] })));

        assert!(result.is_err());
        assert_eq!(store.snapshot().stats, before);
    }

    #[test]
    fn test_remove_missing_id_still_logs() {
        let mut store = store();
        let count = store.snapshot().team.len();
        store.remove::<TeamMember>("nope").unwrap();

        assert_eq!(store.snapshot().team.len(), count);
        assert_eq!(store.snapshot().activity[0].details, "Deleted item ID: nope");
    }

    #[test]
    fn test_activity_log_is_capped() {
        let mut store = store();
        for _ in 0..(ACTIVITY_LOG_CAPACITY + 10) {
            store.update::<Stat>("1", &Map::new()).unwrap();
        }
        assert_eq!(store.snapshot().activity.len(), ACTIVITY_LOG_CAPACITY);
    }

    #[test]
    fn test_system_pages_cannot_be_deleted() {
        let mut store = store();
        for id in siteframe_schema::SYSTEM_PAGE_IDS {
            let err = store.delete_page(id).unwrap_err();
            assert!(matches!(err, StoreError::SystemPage(_)));
        }
        assert_eq!(store.snapshot().pages.len(), 4);
    }

    #[test]
    fn test_edit_page_failure_leaves_page_untouched() {
        let mut store = store();
        let before = store.snapshot().page("home").cloned();
        let logged = store.snapshot().activity.len();

        let result: Result<(), StoreError> = store.edit_page("home", |page| {
            page.sections.clear();
            Err(StoreError::SystemPage("home".to_string()))
        });

        assert!(result.is_err());
        assert_eq!(store.snapshot().page("home").cloned(), before);
        assert_eq!(store.snapshot().activity.len(), logged);
    }

    #[test]
    fn test_config_merge() {
        let mut store = store();
        store
            .update_site_config(&patch(json!({ "contactPhone": "0700 000 000" })))
            .unwrap();

        let config = &store.snapshot().site_config;
        assert_eq!(config.contact_phone, "0700 000 000");
        assert_eq!(config.contact_email, "info@myploti.co.ke");
        assert_eq!(store.snapshot().activity[0].module, "Config");
    }

    #[test]
    fn test_toggle_theme() {
        let mut store = store();
        assert_eq!(store.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(store.toggle_theme().unwrap(), Theme::Light);
    }
}
