use crate::snapshot::SiteSnapshot;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level collections held by the content store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Projects,
    Houses,
    Team,
    Portfolio,
    Testimonials,
    Partners,
    Stats,
    Faqs,
    Inquiries,
    KnowledgeBase,
    Media,
    Pages,
    Activity,
}

impl Collection {
    pub const ALL: [Collection; 13] = [
        Collection::Projects,
        Collection::Houses,
        Collection::Team,
        Collection::Portfolio,
        Collection::Testimonials,
        Collection::Partners,
        Collection::Stats,
        Collection::Faqs,
        Collection::Inquiries,
        Collection::KnowledgeBase,
        Collection::Media,
        Collection::Pages,
        Collection::Activity,
    ];

    /// Key suffix used in persistent storage
    pub fn storage_name(&self) -> &'static str {
        match self {
            Collection::Projects => "projects",
            Collection::Houses => "houses",
            Collection::Team => "team",
            Collection::Portfolio => "portfolio",
            Collection::Testimonials => "testimonials",
            Collection::Partners => "partners",
            Collection::Stats => "stats",
            Collection::Faqs => "faqs",
            Collection::Inquiries => "inquiries",
            Collection::KnowledgeBase => "kb",
            Collection::Media => "media",
            Collection::Pages => "pages",
            Collection::Activity => "logs",
        }
    }

    /// Human-readable module name recorded in the activity log
    pub fn module_name(&self) -> &'static str {
        match self {
            Collection::Projects => "Properties",
            Collection::Houses => "House Designs",
            Collection::Team => "Team",
            Collection::Portfolio => "Portfolio",
            Collection::Testimonials => "Testimonials",
            Collection::Partners => "Partners",
            Collection::Stats => "Stats",
            Collection::Faqs => "FAQs",
            Collection::Inquiries => "CRM",
            Collection::KnowledgeBase => "AI Knowledge",
            Collection::Media => "Media",
            Collection::Pages => "Pages",
            Collection::Activity => "System",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_name())
    }
}

/// A type that lives in one of the snapshot's collections
pub trait Listed: Serialize + DeserializeOwned + Clone + fmt::Debug {
    const COLLECTION: Collection;

    fn select(snapshot: &SiteSnapshot) -> &[Self];

    fn select_mut(snapshot: &mut SiteSnapshot) -> &mut Vec<Self>;
}

/// A listed type with a stable string id
pub trait Record: Listed {
    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);
}

/// Implements `Listed` (and `Record` for id-bearing types) against a snapshot field
macro_rules! listed {
    ($ty:ty, $collection:expr, $field:ident) => {
        impl $crate::record::Listed for $ty {
            const COLLECTION: $crate::record::Collection = $collection;

            fn select(snapshot: &$crate::snapshot::SiteSnapshot) -> &[Self] {
                &snapshot.$field
            }

            fn select_mut(snapshot: &mut $crate::snapshot::SiteSnapshot) -> &mut Vec<Self> {
                &mut snapshot.$field
            }
        }
    };
    ($ty:ty, $collection:expr, $field:ident, record) => {
        $crate::record::listed!($ty, $collection, $field);

        impl $crate::record::Record for $ty {
            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        }
    };
}

pub(crate) use listed;
