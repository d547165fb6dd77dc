pub mod admin;
pub mod init;
pub mod inquiry;
pub mod media;
pub mod page;
pub mod render;
pub mod section;
pub mod site;

pub use admin::{admin, AdminCommand};
pub use init::{init, InitArgs};
pub use inquiry::{inquiry, InquiryCommand};
pub use media::{media, MediaCommand};
pub use page::{page, PageCommand};
pub use render::{render, RenderArgs};
pub use section::{section, SectionArgs};
pub use site::{site, SiteCommand};

use crate::config::Config;
use anyhow::{anyhow, Result};
use colored::Colorize;
use serde_json::{Map, Value};
use siteframe_common::DirStorage;
use siteframe_editor::{Dialogs, EditorError, MutationError};
use siteframe_store::ContentStore;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Store directory overriding `storeDir`
    pub store: Option<PathBuf>,
    /// Answer yes to every confirmation
    pub yes: bool,
}

/// Loaded config plus the opened store
pub struct Session {
    pub config: Config,
    pub store: ContentStore,
    pub dialogs: TerminalDialogs,
}

impl Session {
    pub fn open(cwd: &Path, globals: &GlobalArgs) -> Result<Self> {
        let config = Config::load(cwd)?;
        let root = config.store_path(cwd, globals.store.as_deref());
        debug!(store = %root.display(), "opening store");
        let storage = DirStorage::open(&root)?;
        let store = ContentStore::open(Arc::new(storage), config.store_options())?;

        Ok(Self {
            config,
            store,
            dialogs: TerminalDialogs { assume_yes: globals.yes },
        })
    }
}

/// Dialogs answered on the terminal
#[derive(Debug, Default)]
pub struct TerminalDialogs {
    pub assume_yes: bool,
}

impl TerminalDialogs {
    fn read_line(&self, message: &str) -> Option<String> {
        eprint!("{} ", message.bright_white());
        std::io::stderr().flush().ok()?;
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

impl Dialogs for TerminalDialogs {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        matches!(
            self.read_line(&format!("{} [y/N]", message)).as_deref().map(str::trim),
            Some("y" | "Y" | "yes")
        )
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{} {}", "!".yellow().bold(), message);
    }

    fn prompt(&mut self, message: &str) -> Option<String> {
        self.read_line(message)
    }
}

/// Parse `key=value` pairs; values that are valid JSON keep their type
pub fn parse_assignments(pairs: &[String]) -> Result<Map<String, Value>> {
    parse_assignments_like(pairs, &Map::new())
}

/// Parse `key=value` pairs against the current record: a field that holds
/// text keeps the raw value as text (`title=2024` stays `"2024"`)
pub fn parse_assignments_like(pairs: &[String], current: &Map<String, Value>) -> Result<Map<String, Value>> {
    let mut map = Map::new();
    for pair in pairs {
        let (key, raw) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("Expected key=value, got '{}'", pair))?;
        if key.is_empty() {
            return Err(anyhow!("Empty key in '{}'", pair));
        }
        let value = match current.get(key) {
            Some(Value::String(_)) => Value::String(raw.to_string()),
            _ => parse_value(raw),
        };
        map.insert(key.to_string(), value);
    }
    Ok(map)
}

/// JSON when it parses, otherwise a plain string
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Apply `raw` as parsed by [`parse_value`]; when a text field rejects a
/// JSON number, bool or array, apply the raw text instead
pub fn apply_text_or_json<T>(
    raw: &str,
    mut apply: impl FnMut(Value) -> std::result::Result<T, EditorError>,
) -> std::result::Result<T, EditorError> {
    let value = parse_value(raw);
    if value.is_string() {
        return apply(value);
    }
    match apply(value) {
        Err(EditorError::Mutation(MutationError::InvalidField { .. })) => {
            apply(Value::String(raw.to_string()))
        }
        other => other,
    }
}

pub fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
