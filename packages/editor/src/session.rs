//! # Builder Session
//!
//! One admin's page-builder state: the selected page, the active section, and
//! the mutations applied so far.
//!
//! Every operation writes through to the [`ContentStore`] immediately; the
//! session only remembers what is selected. Section ids are generated here,
//! so the recorded [`PageMutation`]s replay to the same document.

use crate::autosave::AutosaveIndicator;
use crate::dialogs::Dialogs;
use crate::errors::EditorError;
use crate::mutations::{Direction, MutationResult, PageMutation};
use serde_json::Value;
use siteframe_common::IdGenerator;
use siteframe_schema::{PageDocument, SectionKind};
use siteframe_store::ContentStore;
use tracing::{debug, info};

pub const ADD_PAGE_PROMPT: &str = "Enter page URL slug (e.g. 'news') - lowercase, no spaces:";
pub const PAGE_EXISTS_ALERT: &str = "Page ID exists";
pub const REMOVE_SECTION_CONFIRM: &str = "Remove section?";
pub const PUBLISHED_ALERT: &str = "Site Published Successfully! All changes are live.";

/// Page builder state for one editing user
#[derive(Debug, Default)]
pub struct PageBuilder {
    selected_page: Option<String>,
    active_section: Option<String>,
    ids: IdGenerator,
    history: Vec<PageMutation>,
    pub autosave: AutosaveIndicator,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with deterministic section ids
    pub fn with_id_generator(ids: IdGenerator) -> Self {
        Self {
            ids,
            ..Self::default()
        }
    }

    pub fn selected_page(&self) -> Option<&str> {
        self.selected_page.as_deref()
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    /// Mutations applied through this session, oldest first
    pub fn history(&self) -> &[PageMutation] {
        &self.history
    }

    /// Select a page for editing; clears the active section
    pub fn select_page(&mut self, store: &ContentStore, page_id: &str) -> Result<(), EditorError> {
        if store.snapshot().page(page_id).is_none() {
            return Err(EditorError::PageNotFound(page_id.to_string()));
        }
        self.selected_page = Some(page_id.to_string());
        self.active_section = None;
        Ok(())
    }

    /// Select a section of the current page; `None` closes the section editor
    pub fn select_section(&mut self, store: &ContentStore, section_id: Option<&str>) -> Result<(), EditorError> {
        match section_id {
            None => self.active_section = None,
            Some(id) => {
                let page = self.current_page(store)?;
                if page.section(id).is_none() {
                    return Err(crate::MutationError::SectionNotFound(id.to_string()).into());
                }
                self.active_section = Some(id.to_string());
            }
        }
        Ok(())
    }

    /// The selected page document
    pub fn current_page<'a>(&self, store: &'a ContentStore) -> Result<&'a PageDocument, EditorError> {
        let id = self.selected_page.as_deref().ok_or(EditorError::NoActivePage)?;
        store
            .snapshot()
            .page(id)
            .ok_or_else(|| EditorError::PageNotFound(id.to_string()))
    }

    /// Ask for a slug and create a page. A dismissed or blank prompt is not an error.
    pub fn add_page(
        &mut self,
        store: &mut ContentStore,
        dialogs: &mut dyn Dialogs,
    ) -> Result<Option<String>, EditorError> {
        match dialogs.prompt(ADD_PAGE_PROMPT) {
            Some(slug) if !slug.trim().is_empty() => self.add_page_with_slug(store, dialogs, &slug).map(Some),
            _ => Ok(None),
        }
    }

    /// Create a page with one default hero section and select it
    pub fn add_page_with_slug(
        &mut self,
        store: &mut ContentStore,
        dialogs: &mut dyn Dialogs,
        slug: &str,
    ) -> Result<String, EditorError> {
        let id = PageDocument::normalize_slug(slug);
        if id.is_empty() {
            return Err(EditorError::Cancelled);
        }
        if store.snapshot().page(&id).is_some() {
            dialogs.alert(PAGE_EXISTS_ALERT);
            return Err(EditorError::DuplicatePage(id));
        }

        let id = store.add_page(PageDocument::new_custom(&id))?;
        info!(page = %id, "page created");
        self.selected_page = Some(id.clone());
        self.active_section = None;
        self.autosave.touch();
        Ok(id)
    }

    /// Apply a mutation to the selected page and persist it
    pub fn apply(&mut self, store: &mut ContentStore, mutation: PageMutation) -> Result<MutationResult, EditorError> {
        let page_id = self.selected_page.clone().ok_or(EditorError::NoActivePage)?;
        let result = store.edit_page(&page_id, |doc| mutation.apply(doc).map_err(EditorError::from))?;

        debug!(page = %page_id, changed = result.changed, mutation = ?mutation, "mutation applied");
        self.history.push(mutation);
        self.autosave.touch();
        Ok(result)
    }

    /// Append a section of `kind` with default content and style; returns its id
    pub fn add_section(&mut self, store: &mut ContentStore, kind: SectionKind) -> Result<String, EditorError> {
        let section_id = self.ids.new_id("s-");
        self.apply(
            store,
            PageMutation::AddSection {
                section_id: section_id.clone(),
                kind,
            },
        )?;
        Ok(section_id)
    }

    pub fn move_section(
        &mut self,
        store: &mut ContentStore,
        index: usize,
        direction: Direction,
    ) -> Result<MutationResult, EditorError> {
        self.apply(store, PageMutation::MoveSection { index, direction })
    }

    /// Remove a section after confirmation. Returns false when declined.
    pub fn delete_section(
        &mut self,
        store: &mut ContentStore,
        dialogs: &mut dyn Dialogs,
        section_id: &str,
    ) -> Result<bool, EditorError> {
        self.current_page(store)?;
        if !dialogs.confirm(REMOVE_SECTION_CONFIRM) {
            return Ok(false);
        }

        self.apply(
            store,
            PageMutation::RemoveSection {
                section_id: section_id.to_string(),
            },
        )?;
        if self.active_section.as_deref() == Some(section_id) {
            self.active_section = None;
        }
        Ok(true)
    }

    pub fn set_content_field(&mut self, store: &mut ContentStore, field: &str, value: Value) -> Result<(), EditorError> {
        let section_id = self.require_section()?;
        self.apply(
            store,
            PageMutation::SetContentField {
                section_id,
                field: field.to_string(),
                value,
            },
        )?;
        Ok(())
    }

    /// Append to a list field of the active section; `None` appends the field's template
    pub fn add_list_item(
        &mut self,
        store: &mut ContentStore,
        field: &str,
        item: Option<Value>,
    ) -> Result<(), EditorError> {
        let section_id = self.require_section()?;
        self.apply(
            store,
            PageMutation::AddListItem {
                section_id,
                field: field.to_string(),
                item,
            },
        )?;
        Ok(())
    }

    pub fn update_list_item(
        &mut self,
        store: &mut ContentStore,
        field: &str,
        index: usize,
        item_field: &str,
        value: Value,
    ) -> Result<(), EditorError> {
        let section_id = self.require_section()?;
        self.apply(
            store,
            PageMutation::UpdateListItem {
                section_id,
                field: field.to_string(),
                index,
                item_field: item_field.to_string(),
                value,
            },
        )?;
        Ok(())
    }

    pub fn remove_list_item(&mut self, store: &mut ContentStore, field: &str, index: usize) -> Result<(), EditorError> {
        let section_id = self.require_section()?;
        self.apply(
            store,
            PageMutation::RemoveListItem {
                section_id,
                field: field.to_string(),
                index,
            },
        )?;
        Ok(())
    }

    pub fn set_style_field(&mut self, store: &mut ContentStore, field: &str, value: Value) -> Result<(), EditorError> {
        let section_id = self.require_section()?;
        self.apply(
            store,
            PageMutation::SetStyleField {
                section_id,
                field: field.to_string(),
                value,
            },
        )?;
        Ok(())
    }

    /// Put a media URL into a content field of the active section
    pub fn select_media(&mut self, store: &mut ContentStore, field: &str, url: &str) -> Result<(), EditorError> {
        self.set_content_field(store, field, Value::String(url.to_string()))
    }

    pub fn set_meta_field(&mut self, store: &mut ContentStore, field: &str, value: &str) -> Result<(), EditorError> {
        self.apply(
            store,
            PageMutation::SetMetaField {
                field: field.to_string(),
                value: Value::String(value.to_string()),
            },
        )?;
        Ok(())
    }

    /// Every edit is already live; publishing only confirms that to the user.
    pub fn publish(&mut self, dialogs: &mut dyn Dialogs) -> &'static str {
        dialogs.alert(PUBLISHED_ALERT);
        PUBLISHED_ALERT
    }

    fn require_section(&self) -> Result<String, EditorError> {
        self.active_section.clone().ok_or(EditorError::NoActiveSection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogs::ScriptedDialogs;

    fn builder() -> (PageBuilder, ContentStore) {
        let store = ContentStore::in_memory().unwrap();
        (PageBuilder::with_id_generator(IdGenerator::sequential(1)), store)
    }

    #[test]
    fn test_add_page_selects_it() {
        let (mut builder, mut store) = builder();
        let mut dialogs = ScriptedDialogs::accepting().with_prompt(Some("Open Day"));

        let id = builder.add_page(&mut store, &mut dialogs).unwrap();
        assert_eq!(id.as_deref(), Some("open-day"));
        assert_eq!(builder.selected_page(), Some("open-day"));

        let page = store.snapshot().page("open-day").unwrap();
        assert_eq!(page.sections.len(), 1);
        assert!(!page.is_system);
    }

    #[test]
    fn test_dismissed_prompt_changes_nothing() {
        let (mut builder, mut store) = builder();
        let before = store.snapshot().pages.len();
        let mut dialogs = ScriptedDialogs::accepting().with_prompt(None);

        assert_eq!(builder.add_page(&mut store, &mut dialogs).unwrap(), None);
        assert_eq!(store.snapshot().pages.len(), before);
    }

    #[test]
    fn test_section_edits_need_a_selection() {
        let (mut builder, mut store) = builder();
        builder.select_page(&store, "home").unwrap();

        let err = builder
            .set_content_field(&mut store, "title", Value::String("x".into()))
            .unwrap_err();
        assert!(matches!(err, EditorError::NoActiveSection));
    }

    #[test]
    fn test_section_ids_come_from_the_session() {
        let (mut builder, mut store) = builder();
        builder.select_page(&store, "about").unwrap();

        let first = builder.add_section(&mut store, SectionKind::Map).unwrap();
        let second = builder.add_section(&mut store, SectionKind::Faq).unwrap();
        assert_eq!(first, "s-1");
        assert_eq!(second, "s-2");
        assert_eq!(builder.history().len(), 2);
    }

    #[test]
    fn test_publish_is_cosmetic() {
        let (mut builder, store) = builder();
        let before = store.snapshot().clone();
        let mut dialogs = ScriptedDialogs::accepting();

        assert_eq!(builder.publish(&mut dialogs), PUBLISHED_ALERT);
        assert_eq!(dialogs.shown, vec![PUBLISHED_ALERT.to_string()]);
        assert_eq!(store.snapshot(), &before);
    }
}
