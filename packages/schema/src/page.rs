use crate::error::SchemaError;
use crate::patch;
use crate::record::{listed, Collection};
use crate::section::{PageSection, SectionKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Head metadata for a page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
}

impl PageMeta {
    pub const FIELDS: [&'static str; 3] = ["title", "description", "ogImage"];
}

/// An ordered list of sections plus metadata.
///
/// `id` doubles as the URL slug. System pages are seeded and cannot be
/// deleted through the store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageDocument {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
    pub sections: Vec<PageSection>,
    pub is_system: bool,
}

impl PageDocument {
    /// Normalize a user-typed slug: lowercase, whitespace runs become `-`
    pub fn normalize_slug(raw: &str) -> String {
        raw.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Fresh custom page for a normalized slug
    pub fn new_custom(slug: &str) -> Self {
        let title = capitalize(slug);
        let mut hero = PageSection::new("s1", SectionKind::Hero);
        hero.style = None;
        if let crate::section::SectionBody::Hero(content) = &mut hero.body {
            content.title = Some("New Page".to_string());
            content.subtitle = Some("Subtitle goes here".to_string());
            content.button_text = None;
            content.button_link = None;
        }

        Self {
            id: slug.to_string(),
            meta: Some(PageMeta {
                title: title.clone(),
                description: String::new(),
                og_image: None,
            }),
            title,
            sections: vec![hero],
            is_system: false,
        }
    }

    pub fn section(&self, id: &str) -> Option<&PageSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_mut(&mut self, id: &str) -> Option<&mut PageSection> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Whether every section id is unique within the document
    pub fn has_unique_section_ids(&self) -> bool {
        let mut seen = HashSet::new();
        self.sections.iter().all(|s| seen.insert(s.id.as_str()))
    }

    /// Shallow-merge one meta field; creates meta when absent
    pub fn set_meta_field(&mut self, field: &str, value: serde_json::Value) -> Result<(), SchemaError> {
        let current = self.meta.clone().unwrap_or_default();
        let updated = patch::set_field(&current, "PageMeta", &PageMeta::FIELDS, field, value)?;
        self.meta = Some(updated);
        Ok(())
    }
}

fn capitalize(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

listed!(PageDocument, Collection::Pages, pages, record);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionBody;
    use serde_json::json;

    #[test]
    fn test_normalize_slug() {
        assert_eq!(PageDocument::normalize_slug("Our Team"), "our-team");
        assert_eq!(PageDocument::normalize_slug("  Land  For Sale "), "land-for-sale");
        assert_eq!(PageDocument::normalize_slug("   "), "");
    }

    #[test]
    fn test_new_custom_page() {
        let page = PageDocument::new_custom("careers");

        assert_eq!(page.title, "Careers");
        assert_eq!(page.meta.as_ref().unwrap().title, "Careers");
        assert!(!page.is_system);
        assert_eq!(page.sections.len(), 1);
        assert_eq!(page.sections[0].id, "s1");
        match &page.sections[0].body {
            SectionBody::Hero(hero) => {
                assert_eq!(hero.title.as_deref(), Some("New Page"));
                assert_eq!(hero.subtitle.as_deref(), Some("Subtitle goes here"));
            }
            other => panic!("expected hero, got {:?}", other),
        }
    }

    #[test]
    fn test_unique_section_ids() {
        let mut page = PageDocument::new_custom("x");
        assert!(page.has_unique_section_ids());

        page.sections.push(PageSection::new("s1", SectionKind::Map));
        assert!(!page.has_unique_section_ids());
    }

    #[test]
    fn test_set_meta_field_creates_meta() {
        let mut page = PageDocument {
            id: "legacy".to_string(),
            ..Default::default()
        };
        page.set_meta_field("description", json!("About us")).unwrap();

        let meta = page.meta.unwrap();
        assert_eq!(meta.description, "About us");
        assert_eq!(meta.title, "");
    }

    #[test]
    fn test_is_system_defaults_false() {
        let page: PageDocument =
            serde_json::from_value(json!({ "id": "p", "title": "P", "sections": [] })).unwrap();
        assert!(!page.is_system);
    }
}
