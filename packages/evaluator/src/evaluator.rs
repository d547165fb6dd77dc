//! # Page Renderer
//!
//! Turns a page document plus the live site snapshot into a virtual DOM.
//!
//! ## Rendering Contract
//!
//! **INVARIANT: Rendering never fails for a stored document.**
//!
//! - Sections render strictly in array order
//! - An unrecognised section type renders an inline placeholder; every other
//!   section on the page still renders
//! - Missing content fields render blank or fall back to built-in defaults
//! - Derived sections (ProjectGrid, TeamGrid, FAQ, Testimonials) read their
//!   rows from the snapshot unless they carry inline items
//!
//! ## Determinism
//!
//! Same document + snapshot + reveal state → same tree. Attribute and style
//! maps are ordered, and nothing reads the clock.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use siteframe_evaluator::{Evaluator, RevealTracker};
//!
//! let evaluator = Evaluator::new();
//! let page = evaluator.render_page(&snapshot, "home", &RevealTracker::new())?;
//! ```

use crate::reveal::RevealTracker;
use crate::style::shell;
use crate::templates;
use crate::vdom::{RenderedPage, VNode};
use siteframe_schema::{PageDocument, PageSection, SectionBody, SiteSnapshot};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

pub type EvalResult<T> = Result<T, EvalError>;

pub const DEFAULT_BRAND: &str = "MyPloti";

pub const DEFAULT_MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3988.817367963486!2d36.81926067405232!3d-1.283454335624773!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x182f10d22f28f0c1%3A0x2b8e35c2c4b7b20!2sView%20Park%20Towers!5e0!3m2!1sen!2ske!4v1698765432100!5m2!1sen!2ske";

/// Milliseconds of reveal delay added per section position
pub const REVEAL_STEP_MS: usize = 100;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Page '{0}' not found")]
    PageNotFound(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Site name used in default titles and copy
    pub brand: String,
    /// Map shown when a Map section has no embed URL
    pub map_embed_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            map_embed_url: DEFAULT_MAP_EMBED_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    options: RenderOptions,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Look up `page_id` in the snapshot and render it
    pub fn render_page(
        &self,
        snapshot: &SiteSnapshot,
        page_id: &str,
        reveal: &RevealTracker,
    ) -> EvalResult<RenderedPage> {
        let doc = snapshot
            .page(page_id)
            .ok_or_else(|| EvalError::PageNotFound(page_id.to_string()))?;
        Ok(self.render(doc, snapshot, reveal))
    }

    #[instrument(skip(self, doc, snapshot, reveal), fields(page = %doc.id, sections = doc.sections.len()))]
    pub fn render(
        &self,
        doc: &PageDocument,
        snapshot: &SiteSnapshot,
        reveal: &RevealTracker,
    ) -> RenderedPage {
        info!("rendering page");

        let mut page = RenderedPage::new(self.document_title(doc));
        if let Some(meta) = &doc.meta {
            page.description = Some(meta.description.clone()).filter(|d| !d.is_empty());
            page.og_image = meta.og_image.clone().filter(|i| !i.is_empty());
        }

        let sections = doc
            .sections
            .iter()
            .enumerate()
            .map(|(index, section)| self.render_wrapped(index, section, snapshot, reveal));
        page.add_node(VNode::el("div", "min-h-screen").with_children(sections));

        info!(title = %page.title, "page rendered");
        page
    }

    /// `meta.title` when set, otherwise "<title> | <brand>"
    pub fn document_title(&self, doc: &PageDocument) -> String {
        match doc.meta.as_ref().map(|m| m.title.as_str()) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => format!("{} | {}", doc.title, self.options.brand),
        }
    }

    fn render_wrapped(
        &self,
        index: usize,
        section: &PageSection,
        snapshot: &SiteSnapshot,
        reveal: &RevealTracker,
    ) -> VNode {
        let mut wrapper = VNode::el("div", "fade-in-section")
            .with_key(section.id.clone())
            .with_attr("data-section-id", section.id.clone());
        if reveal.is_visible(&section.id) {
            wrapper = wrapper.with_class("is-visible");
        }
        wrapper
            .with_class(&format!("delay-{}", index * REVEAL_STEP_MS))
            .with_child(self.render_section(section, snapshot))
    }

    /// One section, shell included
    pub fn render_section(&self, section: &PageSection, snapshot: &SiteSnapshot) -> VNode {
        let full_bleed = section.kind().map(|k| k.is_full_bleed()).unwrap_or(false);
        let body = self.render_body(section, snapshot);
        if full_bleed {
            VNode::el("div", "w-full").with_child(body)
        } else {
            shell(section.style.as_ref(), body)
        }
    }

    fn render_body(&self, section: &PageSection, snapshot: &SiteSnapshot) -> VNode {
        let brand = self.options.brand.as_str();
        let align = section.style.as_ref().and_then(|s| s.text_align);
        debug!(section = %section.id, kind = section.body.type_name(), "rendering section");

        match &section.body {
            SectionBody::Hero(content) => templates::hero(content),
            SectionBody::RichText(content) => templates::rich_text(content, align),
            SectionBody::Features(content) => templates::features(content),
            SectionBody::ProjectGrid(content) => templates::project_grid(content, snapshot),
            SectionBody::ContactForm(content) => templates::contact_form(content, snapshot),
            SectionBody::Testimonials(content) => templates::testimonials(content, snapshot),
            SectionBody::CallToAction(content) => templates::call_to_action(content),
            SectionBody::TeamGrid(content) => templates::team_grid(content, snapshot),
            SectionBody::Faq(content) => templates::faq(content, snapshot),
            SectionBody::WhyChooseUs(content) => templates::why_choose_us(content, brand),
            SectionBody::ConstructionTeaser(content) => {
                templates::construction_teaser(content, snapshot)
            }
            SectionBody::HowItWorks(content) => templates::how_it_works(content),
            SectionBody::ServicesGrid(content) => templates::services_grid(content, brand),
            SectionBody::Map(content) => {
                templates::map(content, &self.options.map_embed_url, brand)
            }
            SectionBody::Unknown { kind, .. } => {
                warn!(section = %section.id, kind = %kind, "unknown section type");
                templates::unknown(kind)
            }
        }
    }
}
