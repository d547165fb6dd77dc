//! # Schema Migration
//!
//! Persisted state carries a schema version under `<prefix>schema_version`.
//! On open, every step between the stored version and
//! [`CURRENT_SCHEMA_VERSION`] runs in order against the raw stored JSON, and
//! the new version is written back. Storage without a version key is
//! treated as version 0.
//!
//! Steps:
//! - 0 → 1: section `style.paddingTop`/`paddingBottom` stored as strings
//!   become numbers; non-numeric values (old Tailwind classes like `py-20`)
//!   are dropped. Sections of retired types (e.g. `Stats`) are left as they
//!   are and decode as unknown sections.
//! - 1 → 2: project `price`, `bedrooms`, `bathrooms` and `floors` saved as
//!   form strings (`"1500000"`) become numbers; non-numeric values are
//!   dropped so the record loads with the field empty.

use crate::error::StoreError;
use crate::keys::{schema_version_key, StoreKey};
use serde_json::Value;
use siteframe_common::{write_json, Storage};
use siteframe_schema::Collection;
use tracing::{info, warn};

pub const CURRENT_SCHEMA_VERSION: u32 = 2;

type Step = fn(&dyn Storage, &str) -> Result<(), StoreError>;

const STEPS: [(u32, Step); 2] = [(0, numeric_section_padding), (1, numeric_project_fields)];

/// Bring stored state up to the current version. Returns the version found.
pub fn migrate(storage: &dyn Storage, prefix: &str) -> Result<u32, StoreError> {
    let found = stored_version(storage, prefix)?;

    if found > CURRENT_SCHEMA_VERSION {
        warn!(
            found,
            current = CURRENT_SCHEMA_VERSION,
            "stored schema is newer than this build, loading as-is"
        );
        return Ok(found);
    }

    for (from, step) in STEPS.iter() {
        if *from >= found {
            info!(from = *from, to = *from + 1, "running schema migration");
            step(storage, prefix)?;
        }
    }

    if found != CURRENT_SCHEMA_VERSION {
        write_version(storage, prefix)?;
    }
    Ok(found)
}

pub(crate) fn write_version(storage: &dyn Storage, prefix: &str) -> Result<(), StoreError> {
    storage.set(&schema_version_key(prefix), &CURRENT_SCHEMA_VERSION.to_string())?;
    Ok(())
}

fn stored_version(storage: &dyn Storage, prefix: &str) -> Result<u32, StoreError> {
    let raw = storage.get(&schema_version_key(prefix))?;
    Ok(match raw {
        None => 0,
        Some(text) => text.trim().parse().unwrap_or_else(|_| {
            warn!(value = %text, "unreadable schema version, assuming 0");
            0
        }),
    })
}

fn numeric_section_padding(storage: &dyn Storage, prefix: &str) -> Result<(), StoreError> {
    let key = StoreKey::Collection(Collection::Pages).storage_key(prefix);
    let Some(raw) = storage.get(&key)? else {
        return Ok(());
    };

    let mut pages: Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            // Load falls back to the seed pages for this key
            warn!(key = %key, error = %e, "skipping migration of unparseable pages");
            return Ok(());
        }
    };

    let mut changed = 0usize;
    let sections = pages
        .as_array_mut()
        .into_iter()
        .flatten()
        .filter_map(|page| page.get_mut("sections").and_then(Value::as_array_mut))
        .flatten();

    for section in sections {
        let Some(style) = section.get_mut("style").and_then(Value::as_object_mut) else {
            continue;
        };
        for field in ["paddingTop", "paddingBottom"] {
            let Some(Value::String(text)) = style.get(field) else {
                continue;
            };
            match text.trim().trim_end_matches("px").parse::<u32>() {
                Ok(px) => {
                    style.insert(field.to_string(), Value::from(px));
                }
                Err(_) => {
                    style.remove(field);
                }
            }
            changed += 1;
        }
    }

    if changed > 0 {
        info!(fields = changed, "normalized section padding");
        write_json(storage, &key, &pages)?;
    }
    Ok(())
}

const NUMERIC_PROJECT_FIELDS: [&str; 4] = ["price", "bedrooms", "bathrooms", "floors"];

fn numeric_project_fields(storage: &dyn Storage, prefix: &str) -> Result<(), StoreError> {
    let key = StoreKey::Collection(Collection::Projects).storage_key(prefix);
    let Some(raw) = storage.get(&key)? else {
        return Ok(());
    };

    let mut projects: Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(key = %key, error = %e, "skipping migration of unparseable projects");
            return Ok(());
        }
    };

    let mut changed = 0usize;
    let records = projects
        .as_array_mut()
        .into_iter()
        .flatten()
        .filter_map(Value::as_object_mut);

    for record in records {
        for field in NUMERIC_PROJECT_FIELDS {
            let Some(Value::String(text)) = record.get(field) else {
                continue;
            };
            let digits: String = text.trim().chars().filter(|c| *c != ',').collect();
            match digits.parse::<u64>() {
                Ok(n) => {
                    record.insert(field.to_string(), Value::from(n));
                }
                Err(_) => {
                    record.remove(field);
                }
            }
            changed += 1;
        }
    }

    if changed > 0 {
        info!(fields = changed, "normalized project numbers");
        write_json(storage, &key, &projects)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use siteframe_common::MemoryStorage;

    #[test]
    fn test_fresh_storage_gets_current_version() {
        let storage = MemoryStorage::new();
        assert_eq!(migrate(&storage, "p_").unwrap(), 0);
        assert_eq!(
            storage.get("p_schema_version").unwrap().as_deref(),
            Some("2")
        );
    }

    #[test]
    fn test_padding_strings_become_numbers() {
        let storage = MemoryStorage::new();
        let pages = json!([{
            "id": "x",
            "title": "X",
            "sections": [
                { "id": "a", "type": "Hero", "content": {}, "style": { "paddingTop": "120", "paddingBottom": "py-20" } },
                { "id": "b", "type": "Stats", "content": {} }
            ]
        }]);
        storage.set("p_pages", &pages.to_string()).unwrap();

        migrate(&storage, "p_").unwrap();

        let migrated: Value = serde_json::from_str(&storage.get("p_pages").unwrap().unwrap()).unwrap();
        let style = &migrated[0]["sections"][0]["style"];
        assert_eq!(style["paddingTop"], json!(120));
        assert!(style.get("paddingBottom").is_none());
        assert_eq!(migrated[0]["sections"][1]["type"], json!("Stats"));
    }

    #[test]
    fn test_current_version_skips_steps() {
        let storage = MemoryStorage::new();
        storage.set("p_schema_version", "2").unwrap();
        let pages = json!([{ "id": "x", "sections": [{ "id": "a", "type": "Hero", "style": { "paddingTop": "5" } }] }]);
        storage.set("p_pages", &pages.to_string()).unwrap();

        assert_eq!(migrate(&storage, "p_").unwrap(), 2);
        assert_eq!(storage.get("p_pages").unwrap().unwrap(), pages.to_string());
    }

    #[test]
    fn test_project_number_strings_become_numbers() {
        let storage = MemoryStorage::new();
        storage.set("p_schema_version", "1").unwrap();
        let projects = json!([
            { "id": "p1", "title": "Mine", "price": "1,500,000", "bedrooms": "3" },
            { "id": "p2", "title": "Plot", "price": "call us", "floors": 2 }
        ]);
        storage.set("p_projects", &projects.to_string()).unwrap();

        assert_eq!(migrate(&storage, "p_").unwrap(), 1);

        let migrated: Value = serde_json::from_str(&storage.get("p_projects").unwrap().unwrap()).unwrap();
        assert_eq!(migrated[0]["price"], json!(1_500_000));
        assert_eq!(migrated[0]["bedrooms"], json!(3));
        assert!(migrated[1].get("price").is_none());
        assert_eq!(migrated[1]["floors"], json!(2));
        assert_eq!(storage.get("p_schema_version").unwrap().as_deref(), Some("2"));
    }
}
