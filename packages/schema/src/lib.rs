//! # Siteframe Schema
//!
//! Typed content model for the site: page documents and their sections,
//! the entity records held by the content store, and the seed data present
//! at first run.
//!
//! Section payloads are a tagged union ([`SectionBody`]) keyed by
//! [`SectionKind`]. Sections whose type is outside the closed set decode to
//! [`SectionBody::Unknown`] and keep their raw content, so a single stray
//! section never makes a whole page unreadable.

mod entities;
mod error;
mod page;
mod patch;
mod record;
mod section;
mod seed;
mod snapshot;

pub use entities::*;
pub use error::SchemaError;
pub use page::{PageDocument, PageMeta};
pub use patch::{merge_object, set_field};
pub use record::{Collection, Listed, Record};
pub use section::{
    CallToActionContent, CollectionContent, ConstructionTeaserContent, ContactFormContent,
    DataSource, FeatureItem, FeaturesContent, HeroContent, HowItWorksContent, MapContent,
    PageSection, Reason, RichTextContent, SectionBody, SectionKind, SectionStyle,
    ServicesGridContent, Step, TextAlign, WhyChooseUsContent,
};
pub use seed::{seed_pages, SYSTEM_PAGE_IDS};
pub use snapshot::SiteSnapshot;
