//! # Siteframe Editor
//!
//! Everything that writes to the content store on an admin's behalf: the
//! page builder, the generic CRUD surface, and the small bits of UI state
//! around them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ host UI: clicks, forms, Dialogs impl        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor                                      │
//! │  - PageBuilder: selection + PageMutation    │
//! │  - AdminSurface: edit buffer per entity     │
//! │  - AutosaveIndicator, ViewRoute             │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ store: named operations, persisted per key  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Store is source of truth**: sessions hold selections, never content
//! 2. **Mutations are data**: builder edits are [`PageMutation`] values,
//!    validated before they touch a document
//! 3. **No drafts**: every edit is live as soon as it is applied
//!
//! ## Usage
//!
//! ```rust,ignore
//! use siteframe_editor::{PageBuilder, ScriptedDialogs};
//! use siteframe_schema::SectionKind;
//!
//! let mut builder = PageBuilder::new();
//! let mut dialogs = ScriptedDialogs::accepting();
//!
//! builder.add_page_with_slug(&mut store, &mut dialogs, "news")?;
//! let id = builder.add_section(&mut store, SectionKind::Features)?;
//! builder.select_section(&store, Some(&id))?;
//! builder.add_list_item(&mut store, "items", None)?;
//! ```

mod admin;
mod autosave;
mod dialogs;
mod errors;
mod mutations;
mod router;
mod session;

pub use admin::{AdminSurface, EditBuffer, EntityType, DELETE_ITEM_CONFIRM, FILE_TOO_LARGE_ALERT};
pub use autosave::{AutosaveIndicator, SAVING_WINDOW_MS};
pub use dialogs::{Dialogs, ScriptedDialogs};
pub use errors::EditorError;
pub use mutations::{Direction, MutationError, MutationResult, PageMutation};
pub use router::{View, ViewRoute};
pub use session::{PageBuilder, ADD_PAGE_PROMPT, PAGE_EXISTS_ALERT, PUBLISHED_ALERT, REMOVE_SECTION_CONFIRM};
