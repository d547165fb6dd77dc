//! # Admin CRUD Surface
//!
//! Generic list / edit / save / delete over the store's collections, keyed by
//! the entity tags the dashboard uses (`land`, `house`, `team`, ...).
//!
//! An edit works on a JSON copy of the record (the edit buffer). New records
//! get a sentinel id starting with `new`; saving a sentinel buffer inserts,
//! saving any other buffer shallow-merges into the existing record.

use crate::autosave::AutosaveIndicator;
use crate::dialogs::Dialogs;
use crate::errors::EditorError;
use serde_json::{Map, Value};
use siteframe_common::IdGenerator;
use siteframe_schema::{
    HouseType, InquiryStatus, MediaItem, PageDocument, Partner, PortfolioItem, Project, Record,
    Stat, TeamMember, Testimonial,
};
use siteframe_store::{ContentStore, MediaError, MediaUpload, StoreError};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

pub const DELETE_ITEM_CONFIRM: &str = "Delete this item?";
pub const FILE_TOO_LARGE_ALERT: &str = "File too large (Max 2MB).";
pub const CSV_ERROR_ALERT: &str = "Error parsing CSV.";

/// Prefix of edit-buffer ids for records not yet saved
pub const NEW_ID_PREFIX: &str = "new";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    Land,
    House,
    Team,
    Testimonial,
    Partner,
    Portfolio,
    Stat,
    Page,
}

impl EntityType {
    pub const ALL: [EntityType; 8] = [
        EntityType::Land,
        EntityType::House,
        EntityType::Team,
        EntityType::Testimonial,
        EntityType::Partner,
        EntityType::Portfolio,
        EntityType::Stat,
        EntityType::Page,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            EntityType::Land => "land",
            EntityType::House => "house",
            EntityType::Team => "team",
            EntityType::Testimonial => "testimonial",
            EntityType::Partner => "partner",
            EntityType::Portfolio => "portfolio",
            EntityType::Stat => "stat",
            EntityType::Page => "page",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EntityType {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityType::ALL
            .into_iter()
            .find(|entity| entity.tag() == s)
            .ok_or_else(|| EditorError::UnknownEntityType(s.to_string()))
    }
}

/// Runs `$body` with `$t` aliased to the record type behind `$entity`
macro_rules! with_record_type {
    ($entity:expr, $t:ident => $body:expr) => {
        match $entity {
            EntityType::Land => {
                type $t = Project;
                $body
            }
            EntityType::House => {
                type $t = HouseType;
                $body
            }
            EntityType::Team => {
                type $t = TeamMember;
                $body
            }
            EntityType::Testimonial => {
                type $t = Testimonial;
                $body
            }
            EntityType::Partner => {
                type $t = Partner;
                $body
            }
            EntityType::Portfolio => {
                type $t = PortfolioItem;
                $body
            }
            EntityType::Stat => {
                type $t = Stat;
                $body
            }
            EntityType::Page => {
                type $t = PageDocument;
                $body
            }
        }
    };
}

/// Working copy of one record
#[derive(Debug, Clone, PartialEq)]
pub struct EditBuffer {
    pub entity: EntityType,
    pub id: String,
    pub form: Map<String, Value>,
}

impl EditBuffer {
    pub fn is_new(&self) -> bool {
        self.id.starts_with(NEW_ID_PREFIX)
    }
}

#[derive(Debug, Default)]
pub struct AdminSurface {
    editing: Option<EditBuffer>,
    ids: IdGenerator,
    pub autosave: AutosaveIndicator,
}

impl AdminSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_generator(ids: IdGenerator) -> Self {
        Self {
            ids,
            ..Self::default()
        }
    }

    /// Current edit buffer, if any
    pub fn editing(&self) -> Option<&EditBuffer> {
        self.editing.as_ref()
    }

    /// Every record of `entity`, as JSON rows
    pub fn list(&self, store: &ContentStore, entity: EntityType) -> Result<Vec<Value>, EditorError> {
        with_record_type!(entity, T => rows::<T>(store))
    }

    /// Load a record (or a blank one when `id` is None) into the edit buffer
    pub fn start_edit(
        &mut self,
        store: &ContentStore,
        entity: EntityType,
        id: Option<&str>,
    ) -> Result<&EditBuffer, EditorError> {
        let buffer = match id {
            Some(id) => EditBuffer {
                entity,
                id: id.to_string(),
                form: with_record_type!(entity, T => existing_form::<T>(store, id))?,
            },
            None => EditBuffer {
                entity,
                id: self.ids.new_id(&format!("{}-", NEW_ID_PREFIX)),
                form: with_record_type!(entity, T => blank_form::<T>())?,
            },
        };
        debug!(entity = %entity, id = %buffer.id, "edit started");
        Ok(self.editing.insert(buffer))
    }

    /// Set one field of the edit buffer
    pub fn set_field(&mut self, field: &str, value: Value) -> Result<(), EditorError> {
        let buffer = self.editing.as_mut().ok_or(EditorError::NothingToSave)?;
        buffer.form.insert(field.to_string(), value);
        Ok(())
    }

    /// Put a media URL into a field of the edit buffer
    pub fn select_media(&mut self, field: &str, url: &str) -> Result<(), EditorError> {
        self.set_field(field, Value::String(url.to_string()))
    }

    /// Write the edit buffer to the store and close it; returns the record id
    pub fn save(&mut self, store: &mut ContentStore) -> Result<String, EditorError> {
        let buffer = self.editing.take().ok_or(EditorError::NothingToSave)?;
        let entity = buffer.entity;
        let id = with_record_type!(entity, T => save_buffer::<T>(store, buffer))?;

        info!(entity = %entity, id = %id, "record saved");
        self.autosave.touch();
        Ok(id)
    }

    /// Close the edit buffer without saving
    pub fn cancel(&mut self) {
        self.editing = None;
    }

    /// Delete after confirmation. Returns false when declined.
    pub fn delete(
        &mut self,
        store: &mut ContentStore,
        dialogs: &mut dyn Dialogs,
        entity: EntityType,
        id: &str,
    ) -> Result<bool, EditorError> {
        if !dialogs.confirm(DELETE_ITEM_CONFIRM) {
            return Ok(false);
        }
        self.autosave.touch();

        match entity {
            EntityType::Page => store.delete_page(id)?,
            other => with_record_type!(other, T => store.remove::<T>(id))?,
        }
        info!(entity = %entity, id, "record deleted");
        Ok(true)
    }

    /// Upload to the media library, alerting when the file is over the cap
    pub fn upload_media(
        &mut self,
        store: &mut ContentStore,
        dialogs: &mut dyn Dialogs,
        upload: MediaUpload,
    ) -> Result<MediaItem, EditorError> {
        match store.upload_media(upload) {
            Ok(item) => Ok(item),
            Err(StoreError::Media(err @ MediaError::TooLarge { .. })) => {
                dialogs.alert(FILE_TOO_LARGE_ALERT);
                Err(StoreError::Media(err).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn delete_media(&mut self, store: &mut ContentStore, id: &str) -> Result<(), EditorError> {
        store.delete_media(id)?;
        Ok(())
    }

    /// Bulk-import properties from CSV text and report the count
    pub fn import_csv(
        &mut self,
        store: &mut ContentStore,
        dialogs: &mut dyn Dialogs,
        text: &str,
    ) -> Result<usize, EditorError> {
        match store.import_projects_csv(text) {
            Ok(count) => {
                dialogs.alert(&format!("Successfully imported {} projects.", count));
                Ok(count)
            }
            Err(err) => {
                dialogs.alert(CSV_ERROR_ALERT);
                Err(err.into())
            }
        }
    }

    pub fn mark_inquiry_read(&mut self, store: &mut ContentStore, id: &str) -> Result<(), EditorError> {
        store.set_inquiry_status(id, InquiryStatus::Read)?;
        Ok(())
    }

    pub fn save_site_config(&mut self, store: &mut ContentStore, patch: &Map<String, Value>) -> Result<(), EditorError> {
        store.update_site_config(patch)?;
        self.autosave.touch();
        Ok(())
    }

    pub fn save_global_design(&mut self, store: &mut ContentStore, patch: &Map<String, Value>) -> Result<(), EditorError> {
        store.update_global_design(patch)?;
        self.autosave.touch();
        Ok(())
    }
}

fn rows<T: Record>(store: &ContentStore) -> Result<Vec<Value>, EditorError> {
    T::select(store.snapshot())
        .iter()
        .map(|item| serde_json::to_value(item).map_err(EditorError::from))
        .collect()
}

fn existing_form<T: Record>(store: &ContentStore, id: &str) -> Result<Map<String, Value>, EditorError> {
    let record = store.get::<T>(id).ok_or_else(|| StoreError::NotFound {
        collection: T::COLLECTION,
        id: id.to_string(),
    })?;
    to_form(record)
}

fn blank_form<T: Record + Default>() -> Result<Map<String, Value>, EditorError> {
    to_form(&T::default())
}

fn to_form<T: Record>(record: &T) -> Result<Map<String, Value>, EditorError> {
    match serde_json::to_value(record)? {
        Value::Object(form) => Ok(form),
        other => Err(EditorError::InvalidRecord(serde::de::Error::custom(format!(
            "record serialized to {} instead of an object",
            other
        )))),
    }
}

fn save_buffer<T: Record>(store: &mut ContentStore, buffer: EditBuffer) -> Result<String, EditorError> {
    let is_new = buffer.is_new();
    let mut form = buffer.form;

    if is_new {
        form.insert("id".to_string(), Value::String(String::new()));
        let record: T = serde_json::from_value(Value::Object(form))?;
        Ok(store.insert(record)?)
    } else {
        form.remove("id");
        store.update::<T>(&buffer.id, &form)?;
        Ok(buffer.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogs::ScriptedDialogs;
    use serde_json::json;

    fn surface() -> (AdminSurface, ContentStore) {
        let store = ContentStore::in_memory()
            .unwrap()
            .with_id_generator(IdGenerator::sequential(5000));
        (AdminSurface::with_id_generator(IdGenerator::sequential(1)), store)
    }

    #[test]
    fn test_entity_tags() {
        assert_eq!("land".parse::<EntityType>().unwrap(), EntityType::Land);
        assert_eq!(EntityType::Portfolio.to_string(), "portfolio");
        assert!(matches!(
            "widget".parse::<EntityType>(),
            Err(EditorError::UnknownEntityType(_))
        ));
    }

    #[test]
    fn test_new_record_is_inserted() {
        let (mut admin, mut store) = surface();
        let buffer = admin.start_edit(&store, EntityType::Team, None).unwrap();
        assert!(buffer.is_new());

        admin.set_field("name", json!("Wanjiru")).unwrap();
        admin.set_field("role", json!("Architect")).unwrap();
        let id = admin.save(&mut store).unwrap();

        assert_eq!(id, "5000");
        assert_eq!(store.snapshot().team[0].name, "Wanjiru");
        assert!(admin.editing().is_none());
    }

    #[test]
    fn test_existing_record_is_merged() {
        let (mut admin, mut store) = surface();
        let id = store.snapshot().projects[0].id.clone();
        let title = store.snapshot().projects[0].title.clone();

        admin.start_edit(&store, EntityType::Land, Some(&id)).unwrap();
        admin.set_field("priceStr", json!("KES 9")).unwrap();
        admin.save(&mut store).unwrap();

        let project = store.get::<Project>(&id).unwrap();
        assert_eq!(project.price_str, "KES 9");
        assert_eq!(project.title, title);
    }

    #[test]
    fn test_declined_delete_keeps_record() {
        let (mut admin, mut store) = surface();
        let id = store.snapshot().partners[0].id.clone();
        let mut dialogs = ScriptedDialogs::declining();

        assert!(!admin.delete(&mut store, &mut dialogs, EntityType::Partner, &id).unwrap());
        assert!(store.get::<Partner>(&id).is_some());
        assert_eq!(dialogs.shown, vec![DELETE_ITEM_CONFIRM.to_string()]);
    }

    #[test]
    fn test_save_without_buffer() {
        let (mut admin, mut store) = surface();
        assert!(matches!(admin.save(&mut store), Err(EditorError::NothingToSave)));
    }
}
