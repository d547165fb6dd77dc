//! # Siteframe Evaluator
//!
//! Renders page documents into a virtual DOM.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ PageDocument (sections in order)            │
//! │ SiteSnapshot (projects, team, faqs, ...)    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ Evaluator                                   │
//! │  - templates: one per section kind          │
//! │  - style shell / full-bleed wrapper         │
//! │  - reveal wrapper (RevealTracker)           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ RenderedPage: title, SEO meta, VNode tree   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The HTML compiler serializes a [`RenderedPage`]; browser hosts can walk
//! the tree directly.

pub mod evaluator;
pub mod reveal;
pub mod style;
pub mod templates;
pub mod vdom;

pub use evaluator::{
    EvalError, EvalResult, Evaluator, RenderOptions, DEFAULT_BRAND, DEFAULT_MAP_EMBED_URL,
    REVEAL_STEP_MS,
};
pub use reveal::RevealTracker;
pub use templates::{PROJECT_FEATURE_LIMIT, PROJECT_GRID_LIMIT, TEASER_HOUSE_LIMIT};
pub use vdom::{RenderedPage, VNode};
