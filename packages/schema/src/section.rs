//! # Page Sections
//!
//! A section is one vertically stacked block of a page. Its payload is a
//! tagged union keyed by [`SectionKind`]; each kind has one content shape.
//!
//! On the wire a section keeps the flat `{id, type, content, style}` layout
//! used by persisted pages. Decoding is lenient:
//! - missing content fields decode to `None` (rendered blank)
//! - an unrecognized `type`, or content that does not fit its type, decodes
//!   to [`SectionBody::Unknown`] with the raw content kept untouched
//!
//! Kinds whose data comes from a store collection (project grid, team grid,
//! FAQ, testimonials) separate authored display options from a
//! [`DataSource`] that either references the collection or carries inline
//! items.

use crate::entities::{FaqItem, Project, TeamMember, Testimonial};
use crate::error::SchemaError;
use crate::patch::{self, to_object};
use crate::record::Listed;
use crate::snapshot::SiteSnapshot;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Closed set of section types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Hero,
    RichText,
    Features,
    ProjectGrid,
    ContactForm,
    Testimonials,
    CallToAction,
    TeamGrid,
    #[serde(rename = "FAQ")]
    Faq,
    WhyChooseUs,
    ConstructionTeaser,
    HowItWorks,
    ServicesGrid,
    Map,
}

impl SectionKind {
    pub const ALL: [SectionKind; 14] = [
        SectionKind::Hero,
        SectionKind::RichText,
        SectionKind::Features,
        SectionKind::ProjectGrid,
        SectionKind::ContactForm,
        SectionKind::Testimonials,
        SectionKind::CallToAction,
        SectionKind::TeamGrid,
        SectionKind::Faq,
        SectionKind::WhyChooseUs,
        SectionKind::ConstructionTeaser,
        SectionKind::HowItWorks,
        SectionKind::ServicesGrid,
        SectionKind::Map,
    ];

    /// Wire name (the `type` tag)
    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::Hero => "Hero",
            SectionKind::RichText => "RichText",
            SectionKind::Features => "Features",
            SectionKind::ProjectGrid => "ProjectGrid",
            SectionKind::ContactForm => "ContactForm",
            SectionKind::Testimonials => "Testimonials",
            SectionKind::CallToAction => "CallToAction",
            SectionKind::TeamGrid => "TeamGrid",
            SectionKind::Faq => "FAQ",
            SectionKind::WhyChooseUs => "WhyChooseUs",
            SectionKind::ConstructionTeaser => "ConstructionTeaser",
            SectionKind::HowItWorks => "HowItWorks",
            SectionKind::ServicesGrid => "ServicesGrid",
            SectionKind::Map => "Map",
        }
    }

    /// Kinds that manage their own full-width presentation
    pub fn is_full_bleed(&self) -> bool {
        matches!(
            self,
            SectionKind::Hero | SectionKind::CallToAction | SectionKind::Map
        )
    }

    /// Kinds whose data comes from a store collection
    pub fn is_derived(&self) -> bool {
        matches!(
            self,
            SectionKind::ProjectGrid
                | SectionKind::Testimonials
                | SectionKind::TeamGrid
                | SectionKind::Faq
        )
    }

    /// Content fields the builder may set on this kind
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            SectionKind::Hero => &["title", "subtitle", "bgImage", "buttonText", "buttonLink"],
            SectionKind::RichText => &["heading", "body"],
            SectionKind::Features => &["title", "items"],
            SectionKind::ProjectGrid
            | SectionKind::Testimonials
            | SectionKind::TeamGrid
            | SectionKind::Faq => &["title", "subtitle", "source"],
            SectionKind::ContactForm => &["title", "subtitle"],
            SectionKind::CallToAction => &["title", "subtitle", "buttonText", "link"],
            SectionKind::WhyChooseUs => &["title", "subtitle", "body", "image", "reasons"],
            SectionKind::ConstructionTeaser => &["title", "body"],
            SectionKind::HowItWorks => &["title", "subtitle", "steps"],
            SectionKind::ServicesGrid => &["title", "subtitle"],
            SectionKind::Map => &["embedUrl"],
        }
    }

    /// Content fields holding a list of objects
    pub fn list_fields(&self) -> &'static [&'static str] {
        match self {
            SectionKind::Features => &["items"],
            SectionKind::WhyChooseUs => &["reasons"],
            SectionKind::HowItWorks => &["steps"],
            _ => &[],
        }
    }

    /// Fields of one element of a list field
    pub fn item_fields(&self, list_field: &str) -> &'static [&'static str] {
        match (self, list_field) {
            (SectionKind::Features, "items") => &["title", "desc"],
            (SectionKind::WhyChooseUs, "reasons") => &["title", "description"],
            (SectionKind::HowItWorks, "steps") => &["title", "desc"],
            _ => &[],
        }
    }

    /// Element appended by the builder's "add item" control
    pub fn item_template(&self, list_field: &str) -> Option<Value> {
        match (self, list_field) {
            (SectionKind::Features, "items") => Some(json!({ "title": "New", "desc": "Description" })),
            (SectionKind::WhyChooseUs, "reasons") => {
                Some(json!({ "title": "New Reason", "description": "Description" }))
            }
            (SectionKind::HowItWorks, "steps") => Some(json!({ "title": "New Step", "desc": "Description" })),
            _ => None,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SectionKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| SchemaError::UnknownSectionType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Presentation-only attributes; never affects content
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
}

impl SectionStyle {
    pub const FIELDS: [&'static str; 5] = [
        "backgroundColor",
        "textColor",
        "paddingTop",
        "paddingBottom",
        "textAlign",
    ];

    /// Style given to sections created by the builder
    pub fn builder_default() -> Self {
        Self {
            background_color: Some("bg-white".to_string()),
            text_color: None,
            padding_top: Some(80),
            padding_bottom: Some(80),
            text_align: Some(TextAlign::Left),
        }
    }

    /// Shallow-merge one field. Padding accepts numeric strings.
    pub fn set_field(&mut self, field: &str, value: Value) -> Result<(), SchemaError> {
        let value = match (field, value) {
            ("paddingTop" | "paddingBottom", Value::String(raw)) => {
                let parsed: u32 = raw.trim().parse().map_err(|_| SchemaError::InvalidField {
                    field: field.to_string(),
                    reason: format!("'{}' is not a pixel value", raw),
                })?;
                Value::from(parsed)
            }
            (_, value) => value,
        };
        *self = patch::set_field(self, "SectionStyle", &Self::FIELDS, field, value)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RichTextContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureItem {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub items: Vec<FeatureItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CallToActionContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Reason {
    pub title: String,
    pub description: String,
}

/// `reasons: None` renders the built-in list; `Some(vec![])` renders none
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WhyChooseUsContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasons: Option<Vec<Reason>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructionTeaserContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HowItWorksContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesGridContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
}

/// Where a derived section gets its items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum DataSource<T> {
    /// The store collection matching the item type
    Collection,
    /// Items authored directly on the section
    Inline { items: Vec<T> },
}

impl<T> Default for DataSource<T> {
    fn default() -> Self {
        DataSource::Collection
    }
}

impl<T> DataSource<T> {
    pub fn is_collection(&self) -> bool {
        matches!(self, DataSource::Collection)
    }
}

impl<T: Listed> DataSource<T> {
    /// Items to display, given live store data
    pub fn resolve<'a>(&'a self, snapshot: &'a SiteSnapshot) -> &'a [T] {
        match self {
            DataSource::Collection => T::select(snapshot),
            DataSource::Inline { items } => items,
        }
    }
}

/// Display options plus data source for a derived section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionContent<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "DataSource::is_collection")]
    pub source: DataSource<T>,
}

impl<T> Default for CollectionContent<T> {
    fn default() -> Self {
        Self {
            title: None,
            subtitle: None,
            source: DataSource::Collection,
        }
    }
}

/// Section payload, one variant per kind
#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    Hero(HeroContent),
    RichText(RichTextContent),
    Features(FeaturesContent),
    ProjectGrid(CollectionContent<Project>),
    ContactForm(ContactFormContent),
    Testimonials(CollectionContent<Testimonial>),
    CallToAction(CallToActionContent),
    TeamGrid(CollectionContent<TeamMember>),
    Faq(CollectionContent<FaqItem>),
    WhyChooseUs(WhyChooseUsContent),
    ConstructionTeaser(ConstructionTeaserContent),
    HowItWorks(HowItWorksContent),
    ServicesGrid(ServicesGridContent),
    Map(MapContent),
    /// Unrecognized type, or content that does not fit its type
    Unknown { kind: String, content: Value },
}

impl SectionBody {
    /// Content applied when the builder creates a section of `kind`
    pub fn default_for(kind: SectionKind) -> Self {
        let some = |s: &str| Some(s.to_string());
        match kind {
            SectionKind::Hero => SectionBody::Hero(HeroContent {
                title: some("Hero Title"),
                subtitle: some("Subtitle text"),
                bg_image: some("https://via.placeholder.com/1920x600"),
                button_text: some("Click Me"),
                button_link: some("contact"),
            }),
            SectionKind::RichText => SectionBody::RichText(RichTextContent {
                heading: some("Section Heading"),
                body: some("Enter your paragraph text here..."),
            }),
            SectionKind::Features => SectionBody::Features(FeaturesContent {
                title: some("Features"),
                items: vec![FeatureItem {
                    title: "Feature 1".to_string(),
                    desc: "Desc".to_string(),
                }],
            }),
            SectionKind::CallToAction => SectionBody::CallToAction(CallToActionContent {
                title: some("Call To Action"),
                subtitle: some("Do something now"),
                button_text: some("Go"),
                link: some("contact"),
            }),
            SectionKind::ContactForm => SectionBody::ContactForm(ContactFormContent {
                title: some("Contact Us"),
                subtitle: some("Get in touch"),
            }),
            SectionKind::WhyChooseUs => SectionBody::WhyChooseUs(WhyChooseUsContent {
                title: some("Why Choose Us"),
                reasons: Some(vec![Reason {
                    title: "Reason".to_string(),
                    description: "Desc".to_string(),
                }]),
                ..Default::default()
            }),
            SectionKind::HowItWorks => SectionBody::HowItWorks(HowItWorksContent {
                title: some("How It Works"),
                subtitle: some("Simple steps"),
                steps: None,
            }),
            SectionKind::ConstructionTeaser => SectionBody::ConstructionTeaser(ConstructionTeaserContent {
                title: some("Build With Us"),
                body: some("Let us build your dream home."),
            }),
            SectionKind::ProjectGrid => SectionBody::ProjectGrid(CollectionContent::default()),
            SectionKind::Testimonials => SectionBody::Testimonials(CollectionContent::default()),
            SectionKind::TeamGrid => SectionBody::TeamGrid(CollectionContent::default()),
            SectionKind::Faq => SectionBody::Faq(CollectionContent::default()),
            SectionKind::ServicesGrid => SectionBody::ServicesGrid(ServicesGridContent::default()),
            SectionKind::Map => SectionBody::Map(MapContent::default()),
        }
    }

    /// Decode a payload from its wire form. Never fails.
    pub fn decode(type_name: &str, content: Value) -> Self {
        let content = match content {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };
        match SectionKind::from_str(type_name) {
            Ok(kind) => match Self::decode_known(kind, content.clone()) {
                Ok(body) => body,
                Err(e) => {
                    warn!(section_type = type_name, error = %e, "Section content does not match its type");
                    SectionBody::Unknown {
                        kind: type_name.to_string(),
                        content,
                    }
                }
            },
            Err(_) => SectionBody::Unknown {
                kind: type_name.to_string(),
                content,
            },
        }
    }

    fn decode_known(kind: SectionKind, content: Value) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            SectionKind::Hero => SectionBody::Hero(serde_json::from_value(content)?),
            SectionKind::RichText => SectionBody::RichText(serde_json::from_value(content)?),
            SectionKind::Features => SectionBody::Features(serde_json::from_value(content)?),
            SectionKind::ProjectGrid => SectionBody::ProjectGrid(serde_json::from_value(content)?),
            SectionKind::ContactForm => SectionBody::ContactForm(serde_json::from_value(content)?),
            SectionKind::Testimonials => SectionBody::Testimonials(serde_json::from_value(content)?),
            SectionKind::CallToAction => SectionBody::CallToAction(serde_json::from_value(content)?),
            SectionKind::TeamGrid => SectionBody::TeamGrid(serde_json::from_value(content)?),
            SectionKind::Faq => SectionBody::Faq(serde_json::from_value(content)?),
            SectionKind::WhyChooseUs => SectionBody::WhyChooseUs(serde_json::from_value(content)?),
            SectionKind::ConstructionTeaser => {
                SectionBody::ConstructionTeaser(serde_json::from_value(content)?)
            }
            SectionKind::HowItWorks => SectionBody::HowItWorks(serde_json::from_value(content)?),
            SectionKind::ServicesGrid => SectionBody::ServicesGrid(serde_json::from_value(content)?),
            SectionKind::Map => SectionBody::Map(serde_json::from_value(content)?),
        })
    }

    /// Kind of this payload; `None` for unknown sections
    pub fn kind(&self) -> Option<SectionKind> {
        Some(match self {
            SectionBody::Hero(_) => SectionKind::Hero,
            SectionBody::RichText(_) => SectionKind::RichText,
            SectionBody::Features(_) => SectionKind::Features,
            SectionBody::ProjectGrid(_) => SectionKind::ProjectGrid,
            SectionBody::ContactForm(_) => SectionKind::ContactForm,
            SectionBody::Testimonials(_) => SectionKind::Testimonials,
            SectionBody::CallToAction(_) => SectionKind::CallToAction,
            SectionBody::TeamGrid(_) => SectionKind::TeamGrid,
            SectionBody::Faq(_) => SectionKind::Faq,
            SectionBody::WhyChooseUs(_) => SectionKind::WhyChooseUs,
            SectionBody::ConstructionTeaser(_) => SectionKind::ConstructionTeaser,
            SectionBody::HowItWorks(_) => SectionKind::HowItWorks,
            SectionBody::ServicesGrid(_) => SectionKind::ServicesGrid,
            SectionBody::Map(_) => SectionKind::Map,
            SectionBody::Unknown { .. } => return None,
        })
    }

    /// Wire `type` tag
    pub fn type_name(&self) -> &str {
        match self {
            SectionBody::Unknown { kind, .. } => kind,
            known => known.kind().map(|k| k.name()).unwrap_or_default(),
        }
    }

    /// Wire `content` object
    pub fn content(&self) -> Value {
        let encoded = match self {
            SectionBody::Hero(c) => serde_json::to_value(c),
            SectionBody::RichText(c) => serde_json::to_value(c),
            SectionBody::Features(c) => serde_json::to_value(c),
            SectionBody::ProjectGrid(c) => serde_json::to_value(c),
            SectionBody::ContactForm(c) => serde_json::to_value(c),
            SectionBody::Testimonials(c) => serde_json::to_value(c),
            SectionBody::CallToAction(c) => serde_json::to_value(c),
            SectionBody::TeamGrid(c) => serde_json::to_value(c),
            SectionBody::Faq(c) => serde_json::to_value(c),
            SectionBody::WhyChooseUs(c) => serde_json::to_value(c),
            SectionBody::ConstructionTeaser(c) => serde_json::to_value(c),
            SectionBody::HowItWorks(c) => serde_json::to_value(c),
            SectionBody::ServicesGrid(c) => serde_json::to_value(c),
            SectionBody::Map(c) => serde_json::to_value(c),
            SectionBody::Unknown { content, .. } => return content.clone(),
        };
        encoded.unwrap_or_else(|_| Value::Object(Map::new()))
    }

    fn known_kind(&self) -> Result<SectionKind, SchemaError> {
        self.kind()
            .ok_or_else(|| SchemaError::UnknownSectionType(self.type_name().to_string()))
    }

    fn rebuild(&mut self, kind: SectionKind, content: Value, field: &str) -> Result<(), SchemaError> {
        *self = Self::decode_known(kind, content).map_err(|e| SchemaError::InvalidField {
            field: field.to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Shallow-merge `{field: value}` into the content
    pub fn set_field(&mut self, field: &str, value: Value) -> Result<(), SchemaError> {
        let kind = self.known_kind()?;
        if !kind.fields().contains(&field) {
            return Err(SchemaError::FieldNotFound {
                target: kind.name().to_string(),
                field: field.to_string(),
            });
        }

        let mut content = to_object(&self.content())?;
        let mut patch = Map::new();
        patch.insert(field.to_string(), value);
        patch::merge_object(&mut content, &patch)?;
        self.rebuild(kind, content, field)
    }

    /// Current elements of a list field (missing list reads as empty)
    fn list(&self, kind: SectionKind, field: &str) -> Result<Vec<Value>, SchemaError> {
        if !kind.list_fields().contains(&field) {
            return Err(SchemaError::NotAList {
                target: kind.name().to_string(),
                field: field.to_string(),
            });
        }
        match self.content().get(field) {
            Some(Value::Array(items)) => Ok(items.clone()),
            _ => Ok(Vec::new()),
        }
    }

    fn replace_list(&mut self, kind: SectionKind, field: &str, items: Vec<Value>) -> Result<(), SchemaError> {
        let mut content = to_object(&self.content())?;
        let mut patch = Map::new();
        patch.insert(field.to_string(), Value::Array(items));
        patch::merge_object(&mut content, &patch)?;
        self.rebuild(kind, content, field)
    }

    /// Number of elements in a list field
    pub fn list_len(&self, field: &str) -> Result<usize, SchemaError> {
        let kind = self.known_kind()?;
        Ok(self.list(kind, field)?.len())
    }

    /// Append `item` to a list field
    pub fn add_item(&mut self, field: &str, item: Value) -> Result<(), SchemaError> {
        let kind = self.known_kind()?;
        let mut items = self.list(kind, field)?;
        items.push(item);
        self.replace_list(kind, field, items)
    }

    /// Shallow-merge `{item_field: value}` into the element at `index`
    pub fn update_item(
        &mut self,
        field: &str,
        index: usize,
        item_field: &str,
        value: Value,
    ) -> Result<(), SchemaError> {
        let kind = self.known_kind()?;
        let mut items = self.list(kind, field)?;
        let len = items.len();
        let allowed = kind.item_fields(field);
        if !allowed.contains(&item_field) {
            return Err(SchemaError::FieldNotFound {
                target: format!("{}.{}", kind.name(), field),
                field: item_field.to_string(),
            });
        }

        let element = items.get_mut(index).ok_or(SchemaError::IndexOutOfRange {
            field: field.to_string(),
            index,
            len,
        })?;
        let mut patch = Map::new();
        patch.insert(item_field.to_string(), value);
        patch::merge_object(element, &patch)?;

        self.replace_list(kind, field, items)
    }

    /// Remove the element at `index` from a list field
    pub fn remove_item(&mut self, field: &str, index: usize) -> Result<(), SchemaError> {
        let kind = self.known_kind()?;
        let mut items = self.list(kind, field)?;
        if index >= items.len() {
            return Err(SchemaError::IndexOutOfRange {
                field: field.to_string(),
                index,
                len: items.len(),
            });
        }
        items.remove(index);
        self.replace_list(kind, field, items)
    }
}

/// One block of a page document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSection", into = "RawSection")]
pub struct PageSection {
    /// Unique within the parent document
    pub id: String,
    pub body: SectionBody,
    pub style: Option<SectionStyle>,
}

impl PageSection {
    /// New section with the kind's default content and the builder's default style
    pub fn new(id: impl Into<String>, kind: SectionKind) -> Self {
        Self {
            id: id.into(),
            body: SectionBody::default_for(kind),
            style: Some(SectionStyle::builder_default()),
        }
    }

    pub fn kind(&self) -> Option<SectionKind> {
        self.body.kind()
    }
}

#[derive(Serialize, Deserialize)]
struct RawSection {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    style: Option<SectionStyle>,
}

impl From<RawSection> for PageSection {
    fn from(raw: RawSection) -> Self {
        Self {
            body: SectionBody::decode(&raw.kind, raw.content),
            id: raw.id,
            style: raw.style,
        }
    }
}

impl From<PageSection> for RawSection {
    fn from(section: PageSection) -> Self {
        Self {
            kind: section.body.type_name().to_string(),
            content: section.body.content(),
            id: section.id,
            style: section.style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in SectionKind::ALL {
            assert_eq!(kind.name().parse::<SectionKind>().unwrap(), kind);
        }
        assert!("Stats".parse::<SectionKind>().is_err());
    }

    #[test]
    fn test_default_content_round_trips_through_wire_form() {
        for kind in SectionKind::ALL {
            let section = PageSection::new("s-1", kind);
            let json = serde_json::to_string(&section).unwrap();
            let back: PageSection = serde_json::from_str(&json).unwrap();
            assert_eq!(back.body, SectionBody::default_for(kind), "kind {}", kind);
        }
    }

    #[test]
    fn test_unknown_type_keeps_raw_content() {
        let raw = json!({ "id": "s1", "type": "Stats", "content": { "count": 4 } });
        let section: PageSection = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(section.kind(), None);
        assert_eq!(section.body.type_name(), "Stats");
        assert_eq!(serde_json::to_value(&section).unwrap(), raw);
    }

    #[test]
    fn test_mismatched_content_decodes_as_unknown() {
        let raw = json!({ "id": "s1", "type": "Hero", "content": { "title": 42 } });
        let section: PageSection = serde_json::from_value(raw).unwrap();
        assert!(matches!(section.body, SectionBody::Unknown { .. }));
    }

    #[test]
    fn test_missing_fields_decode_blank() {
        let raw = json!({ "id": "s1", "type": "Hero", "content": { "title": "Only" } });
        let section: PageSection = serde_json::from_value(raw).unwrap();
        match section.body {
            SectionBody::Hero(hero) => {
                assert_eq!(hero.title.as_deref(), Some("Only"));
                assert!(hero.subtitle.is_none());
            }
            other => panic!("expected hero, got {:?}", other),
        }
    }

    #[test]
    fn test_set_field_rejects_field_of_other_kind() {
        let mut body = SectionBody::default_for(SectionKind::RichText);
        let err = body.set_field("buttonText", json!("Go")).unwrap_err();
        assert!(matches!(err, SchemaError::FieldNotFound { .. }));
    }

    #[test]
    fn test_list_ops_on_missing_list() {
        let mut body = SectionBody::default_for(SectionKind::HowItWorks);
        assert_eq!(body.list_len("steps").unwrap(), 0);

        body.add_item("steps", json!({ "title": "Visit", "desc": "Come see" }))
            .unwrap();
        match &body {
            SectionBody::HowItWorks(c) => {
                let steps = c.steps.as_ref().unwrap();
                assert_eq!(steps[0].title, "Visit");
            }
            other => panic!("expected how-it-works, got {:?}", other),
        }
    }

    #[test]
    fn test_update_item_out_of_range() {
        let mut body = SectionBody::default_for(SectionKind::Features);
        let err = body.update_item("items", 3, "title", json!("X")).unwrap_err();
        assert_eq!(
            err,
            SchemaError::IndexOutOfRange {
                field: "items".to_string(),
                index: 3,
                len: 1
            }
        );
    }

    #[test]
    fn test_style_padding_accepts_numeric_string() {
        let mut style = SectionStyle::builder_default();
        style.set_field("paddingTop", json!("120")).unwrap();
        assert_eq!(style.padding_top, Some(120));

        assert!(style.set_field("paddingTop", json!("py-20")).is_err());
        assert!(style.set_field("margin", json!("1")).is_err());
    }

    #[test]
    fn test_inline_source_overrides_collection() {
        let mut snapshot = SiteSnapshot::default();
        snapshot.faqs.push(FaqItem {
            question: "From store?".to_string(),
            answer: "Yes".to_string(),
        });

        let by_collection: CollectionContent<FaqItem> = CollectionContent::default();
        assert_eq!(by_collection.source.resolve(&snapshot).len(), 1);

        let inline = CollectionContent {
            source: DataSource::Inline {
                items: vec![FaqItem::default(), FaqItem::default()],
            },
            ..CollectionContent::default()
        };
        assert_eq!(inline.source.resolve(&snapshot).len(), 2);
    }
}
