//! # Page Mutations
//!
//! Builder operations on a single page document, as data.
//!
//! ## Design Principles
//!
//! 1. **Validated**: every mutation is checked against the document first;
//!    a failed mutation leaves the document untouched
//! 2. **Replayable**: mutations carry every generated value (section ids),
//!    so applying the same sequence to the same document gives the same result
//! 3. **Shallow**: field edits merge `{field: value}` at one level, like the
//!    builder's form controls
//!
//! ## Mutation Semantics
//!
//! ### MoveSection
//! - Swaps with the adjacent section
//! - No-op at either boundary (`changed == false`)
//!
//! ### SetStyleField
//! - Starts from the builder's default style when the section has none
//!
//! ### List items
//! - `AddListItem` without an item appends the field's template object
//! - A list field absent from the content behaves as an empty list

use serde::{Deserialize, Serialize};
use serde_json::Value;
use siteframe_schema::{PageDocument, PageSection, SchemaError, SectionKind, SectionStyle};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl std::str::FromStr for Direction {
    type Err = MutationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(MutationError::InvalidStructure(format!(
                "direction must be 'up' or 'down', got '{}'",
                other
            ))),
        }
    }
}

/// Builder operations on one page document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum PageMutation {
    /// Append a section with the kind's default content and style
    AddSection { section_id: String, kind: SectionKind },

    /// Swap the section at `index` with its neighbour
    MoveSection { index: usize, direction: Direction },

    RemoveSection { section_id: String },

    /// Shallow-merge `{field: value}` into the section content
    SetContentField {
        section_id: String,
        field: String,
        value: Value,
    },

    /// Append to a list field (the field's template when `item` is None)
    AddListItem {
        section_id: String,
        field: String,
        item: Option<Value>,
    },

    /// Shallow-merge `{item_field: value}` into one list element
    UpdateListItem {
        section_id: String,
        field: String,
        index: usize,
        item_field: String,
        value: Value,
    },

    RemoveListItem {
        section_id: String,
        field: String,
        index: usize,
    },

    /// Shallow-merge `{field: value}` into the section style
    SetStyleField {
        section_id: String,
        field: String,
        value: Value,
    },

    /// Shallow-merge `{field: value}` into the page meta
    SetMetaField { field: String, value: Value },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Section id already used: {0}")]
    DuplicateSectionId(String),

    #[error("Index {index} out of range for {len} sections")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown section type: {0}")]
    UnknownSectionType(String),

    #[error("Invalid field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Invalid structure: {0}")]
    InvalidStructure(String),
}

impl From<SchemaError> for MutationError {
    fn from(e: SchemaError) -> Self {
        match e {
            SchemaError::UnknownSectionType(kind) => MutationError::UnknownSectionType(kind),
            SchemaError::InvalidField { field, reason } => MutationError::InvalidField { field, reason },
            SchemaError::FieldNotFound { target, field } => MutationError::InvalidField {
                field,
                reason: format!("not a field of {}", target),
            },
            SchemaError::NotAList { target, field } => MutationError::InvalidField {
                field,
                reason: format!("not a list field of {}", target),
            },
            other => MutationError::InvalidStructure(other.to_string()),
        }
    }
}

/// Outcome of an applied mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationResult {
    /// False when the mutation was a valid no-op (boundary moves)
    pub changed: bool,
}

impl PageMutation {
    /// Apply mutation to a page with validation
    pub fn apply(&self, doc: &mut PageDocument) -> Result<MutationResult, MutationError> {
        self.validate(doc)?;

        match self {
            PageMutation::AddSection { section_id, kind } => {
                doc.sections.push(PageSection::new(section_id.clone(), *kind));
            }

            PageMutation::MoveSection { index, direction } => {
                return Ok(Self::apply_move(doc, *index, *direction));
            }

            PageMutation::RemoveSection { section_id } => {
                doc.sections.retain(|s| &s.id != section_id);
            }

            PageMutation::SetContentField { section_id, field, value } => {
                section_mut(doc, section_id)?.body.set_field(field, value.clone())?;
            }

            PageMutation::AddListItem { section_id, field, item } => {
                let section = section_mut(doc, section_id)?;
                let item = match item {
                    Some(item) => item.clone(),
                    None => template_for(section, field)?,
                };
                section.body.add_item(field, item)?;
            }

            PageMutation::UpdateListItem {
                section_id,
                field,
                index,
                item_field,
                value,
            } => {
                section_mut(doc, section_id)?
                    .body
                    .update_item(field, *index, item_field, value.clone())?;
            }

            PageMutation::RemoveListItem { section_id, field, index } => {
                section_mut(doc, section_id)?.body.remove_item(field, *index)?;
            }

            PageMutation::SetStyleField { section_id, field, value } => {
                let section = section_mut(doc, section_id)?;
                let mut style = section.style.clone().unwrap_or_else(SectionStyle::builder_default);
                style.set_field(field, value.clone())?;
                section.style = Some(style);
            }

            PageMutation::SetMetaField { field, value } => {
                doc.set_meta_field(field, value.clone())?;
            }
        }

        Ok(MutationResult { changed: true })
    }

    /// Check that the mutation can apply to `doc`
    pub fn validate(&self, doc: &PageDocument) -> Result<(), MutationError> {
        match self {
            PageMutation::AddSection { section_id, .. } => {
                if doc.section(section_id).is_some() {
                    return Err(MutationError::DuplicateSectionId(section_id.clone()));
                }
                Ok(())
            }

            PageMutation::MoveSection { index, .. } => {
                if *index >= doc.sections.len() {
                    return Err(MutationError::IndexOutOfRange {
                        index: *index,
                        len: doc.sections.len(),
                    });
                }
                Ok(())
            }

            PageMutation::RemoveSection { section_id }
            | PageMutation::SetStyleField { section_id, .. } => {
                doc.section(section_id)
                    .ok_or_else(|| MutationError::SectionNotFound(section_id.clone()))?;
                Ok(())
            }

            PageMutation::SetContentField { section_id, .. }
            | PageMutation::AddListItem { section_id, .. }
            | PageMutation::UpdateListItem { section_id, .. }
            | PageMutation::RemoveListItem { section_id, .. } => {
                let section = doc
                    .section(section_id)
                    .ok_or_else(|| MutationError::SectionNotFound(section_id.clone()))?;
                if section.kind().is_none() {
                    return Err(MutationError::UnknownSectionType(
                        section.body.type_name().to_string(),
                    ));
                }
                Ok(())
            }

            PageMutation::SetMetaField { .. } => Ok(()),
        }
    }

    /// Section the mutation targets, if any
    pub fn section_id(&self) -> Option<&str> {
        match self {
            PageMutation::AddSection { section_id, .. }
            | PageMutation::RemoveSection { section_id }
            | PageMutation::SetContentField { section_id, .. }
            | PageMutation::AddListItem { section_id, .. }
            | PageMutation::UpdateListItem { section_id, .. }
            | PageMutation::RemoveListItem { section_id, .. }
            | PageMutation::SetStyleField { section_id, .. } => Some(section_id),
            PageMutation::MoveSection { .. } | PageMutation::SetMetaField { .. } => None,
        }
    }

    fn apply_move(doc: &mut PageDocument, index: usize, direction: Direction) -> MutationResult {
        let target = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < doc.sections.len() => index + 1,
            _ => return MutationResult { changed: false },
        };
        doc.sections.swap(index, target);
        MutationResult { changed: true }
    }
}

fn section_mut<'a>(doc: &'a mut PageDocument, section_id: &str) -> Result<&'a mut PageSection, MutationError> {
    doc.section_mut(section_id)
        .ok_or_else(|| MutationError::SectionNotFound(section_id.to_string()))
}

fn template_for(section: &PageSection, field: &str) -> Result<Value, MutationError> {
    section
        .kind()
        .and_then(|kind| kind.item_template(field))
        .ok_or_else(|| MutationError::InvalidField {
            field: field.to_string(),
            reason: "no item template for this field".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use siteframe_schema::SectionBody;

    fn page() -> PageDocument {
        let mut doc = PageDocument::new_custom("test");
        for (id, kind) in [("a", SectionKind::RichText), ("b", SectionKind::Features)] {
            PageMutation::AddSection {
                section_id: id.to_string(),
                kind,
            }
            .apply(&mut doc)
            .unwrap();
        }
        doc
    }

    fn ids(doc: &PageDocument) -> Vec<&str> {
        doc.sections.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_add_section_rejects_duplicate_id() {
        let mut doc = page();
        let err = PageMutation::AddSection {
            section_id: "a".to_string(),
            kind: SectionKind::Map,
        }
        .apply(&mut doc)
        .unwrap_err();
        assert_eq!(err, MutationError::DuplicateSectionId("a".to_string()));
    }

    #[test]
    fn test_move_boundaries_are_noops() {
        let mut doc = page();
        let up = PageMutation::MoveSection {
            index: 0,
            direction: Direction::Up,
        };
        assert!(!up.apply(&mut doc).unwrap().changed);

        let down = PageMutation::MoveSection {
            index: 2,
            direction: Direction::Down,
        };
        assert!(!down.apply(&mut doc).unwrap().changed);
        assert_eq!(ids(&doc), vec!["s1", "a", "b"]);
    }

    #[test]
    fn test_move_out_of_range() {
        let mut doc = page();
        let err = PageMutation::MoveSection {
            index: 9,
            direction: Direction::Up,
        }
        .apply(&mut doc)
        .unwrap_err();
        assert_eq!(err, MutationError::IndexOutOfRange { index: 9, len: 3 });
    }

    #[test]
    fn test_set_content_field() {
        let mut doc = page();
        PageMutation::SetContentField {
            section_id: "a".to_string(),
            field: "heading".to_string(),
            value: json!("Our Story"),
        }
        .apply(&mut doc)
        .unwrap();

        match &doc.section("a").unwrap().body {
            SectionBody::RichText(c) => assert_eq!(c.heading.as_deref(), Some("Our Story")),
            other => panic!("expected rich text, got {:?}", other),
        }
    }

    #[test]
    fn test_add_list_item_uses_template() {
        let mut doc = page();
        PageMutation::AddListItem {
            section_id: "b".to_string(),
            field: "items".to_string(),
            item: None,
        }
        .apply(&mut doc)
        .unwrap();

        match &doc.section("b").unwrap().body {
            SectionBody::Features(c) => {
                assert_eq!(c.items.len(), 2);
                assert_eq!(c.items[1].title, "New");
                assert_eq!(c.items[1].desc, "Description");
            }
            other => panic!("expected features, got {:?}", other),
        }
    }

    #[test]
    fn test_style_defaults_when_absent() {
        let mut doc = page();
        assert!(doc.section("s1").unwrap().style.is_none());

        PageMutation::SetStyleField {
            section_id: "s1".to_string(),
            field: "textAlign".to_string(),
            value: json!("center"),
        }
        .apply(&mut doc)
        .unwrap();

        let style = doc.section("s1").unwrap().style.clone().unwrap();
        assert_eq!(style.padding_top, Some(80));
        assert_eq!(style.text_align, Some(siteframe_schema::TextAlign::Center));
    }

    #[test]
    fn test_failed_edit_leaves_section_untouched() {
        let mut doc = page();
        let before = doc.clone();
        let err = PageMutation::SetContentField {
            section_id: "a".to_string(),
            field: "heading".to_string(),
            value: json!({ "nested": true }),
        }
        .apply(&mut doc)
        .unwrap_err();

        assert!(matches!(err, MutationError::InvalidField { .. }));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_mutations_serialize() {
        let mutation = PageMutation::MoveSection {
            index: 1,
            direction: Direction::Down,
        };
        let json = serde_json::to_value(&mutation).unwrap();
        assert_eq!(json, json!({ "MoveSection": { "index": 1, "direction": "down" } }));
        assert_eq!(serde_json::from_value::<PageMutation>(json).unwrap(), mutation);
    }
}
