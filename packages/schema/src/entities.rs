//! Entity records owned by the content store collections.
//!
//! Records decode leniently (`#[serde(default)]`): persisted data written by
//! an older shape loads with missing fields empty rather than failing.

use crate::record::{listed, Collection};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectType {
    #[default]
    Residential,
    Commercial,
    House,
    Wall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Purpose {
    #[default]
    Investment,
    Settlement,
    Commercial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Ready,
    #[serde(rename = "Off-plan")]
    OffPlan,
}

/// A property listing (land or house)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub location: String,
    pub price: u64,
    pub price_str: String,
    pub image_url: String,
    pub images: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
    #[serde(rename = "type")]
    pub kind: ProjectType,
    pub size: String,
    pub purpose: Purpose,
    pub amenities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floors: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

/// A standard house design offered for construction
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HouseType {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub starting_price_str: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PortfolioCategory {
    #[default]
    Construction,
    Interior,
    Landscaping,
    Wall,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecEntry {
    pub label: String,
    pub value: String,
}

/// A completed job shown in a service gallery
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioItem {
    pub id: String,
    pub category: PortfolioCategory,
    pub title: String,
    pub location: String,
    pub description: String,
    pub main_image: String,
    pub gallery: Vec<String>,
    pub specs: Vec<SpecEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub content: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub logo_url: String,
}

/// Headline figure; `icon` names an icon in the front-end icon set
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub id: String,
    pub label: String,
    pub value: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InquiryStatus {
    #[default]
    New,
    Read,
    Contacted,
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InquiryStatus::New => "New",
            InquiryStatus::Read => "Read",
            InquiryStatus::Contacted => "Contacted",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for InquiryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "new" => Ok(InquiryStatus::New),
            "read" => Ok(InquiryStatus::Read),
            "contacted" => Ok(InquiryStatus::Contacted),
            other => Err(format!("unknown inquiry status: {}", other)),
        }
    }
}

/// A lead captured by the contact form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Inquiry {
    pub id: String,
    pub date: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub purpose: String,
    pub message: String,
    pub status: InquiryStatus,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeBaseItem {
    pub id: String,
    pub topic: String,
    pub content: String,
}

/// Contact details and hero copy shared by every page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub contact_address: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hero_title: "Building Dreams Into Homes.".to_string(),
            hero_subtitle: "Secure affordable land, access modern home designs, and get tailored construction solutions anywhere in Kenya.".to_string(),
            contact_phone: "(+254) 709 202 299".to_string(),
            contact_email: "info@myploti.co.ke".to_string(),
            contact_address: "View Park Towers, 14th Floor, Uhuru Highway, Nairobi".to_string(),
        }
    }
}

/// Site-wide design tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalDesign {
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
    pub border_radius: String,
}

impl Default for GlobalDesign {
    fn default() -> Self {
        Self {
            primary_color: "#007636".to_string(),
            secondary_color: "#b96807".to_string(),
            font_family: "Poppins".to_string(),
            border_radius: "0.75rem".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Document,
}

/// An uploaded asset; `url` holds the data URL inline
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaItem {
    pub id: String,
    pub url: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// One mutating admin action
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityEntry {
    pub id: String,
    pub action: String,
    pub module: String,
    pub details: String,
    pub timestamp: String,
    pub user: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

listed!(Project, Collection::Projects, projects, record);
listed!(HouseType, Collection::Houses, houses, record);
listed!(TeamMember, Collection::Team, team, record);
listed!(PortfolioItem, Collection::Portfolio, portfolio, record);
listed!(Testimonial, Collection::Testimonials, testimonials, record);
listed!(Partner, Collection::Partners, partners, record);
listed!(Stat, Collection::Stats, stats, record);
listed!(FaqItem, Collection::Faqs, faqs);
listed!(Inquiry, Collection::Inquiries, inquiries, record);
listed!(KnowledgeBaseItem, Collection::KnowledgeBase, knowledge_base, record);
listed!(MediaItem, Collection::Media, media, record);
listed!(ActivityEntry, Collection::Activity, activity, record);
