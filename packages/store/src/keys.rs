use siteframe_schema::{Collection, SiteSnapshot, Theme};

/// One independently persisted slice of the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Collection(Collection),
    SiteConfig,
    GlobalDesign,
    Theme,
}

impl StoreKey {
    /// Every persisted slice, in load order
    pub fn all() -> Vec<StoreKey> {
        let mut keys: Vec<StoreKey> = Collection::ALL.iter().map(|c| StoreKey::Collection(*c)).collect();
        keys.push(StoreKey::SiteConfig);
        keys.push(StoreKey::GlobalDesign);
        keys.push(StoreKey::Theme);
        keys
    }

    /// Key name in storage. The theme preference is stored un-prefixed.
    pub fn storage_key(&self, prefix: &str) -> String {
        match self {
            StoreKey::Collection(collection) => format!("{}{}", prefix, collection.storage_name()),
            StoreKey::SiteConfig => format!("{}config", prefix),
            StoreKey::GlobalDesign => format!("{}design", prefix),
            StoreKey::Theme => "theme".to_string(),
        }
    }

    /// Serialized value of this slice
    pub fn encode(&self, snapshot: &SiteSnapshot) -> Result<String, serde_json::Error> {
        match self {
            StoreKey::Collection(collection) => match collection {
                Collection::Projects => serde_json::to_string(&snapshot.projects),
                Collection::Houses => serde_json::to_string(&snapshot.houses),
                Collection::Team => serde_json::to_string(&snapshot.team),
                Collection::Portfolio => serde_json::to_string(&snapshot.portfolio),
                Collection::Testimonials => serde_json::to_string(&snapshot.testimonials),
                Collection::Partners => serde_json::to_string(&snapshot.partners),
                Collection::Stats => serde_json::to_string(&snapshot.stats),
                Collection::Faqs => serde_json::to_string(&snapshot.faqs),
                Collection::Inquiries => serde_json::to_string(&snapshot.inquiries),
                Collection::KnowledgeBase => serde_json::to_string(&snapshot.knowledge_base),
                Collection::Media => serde_json::to_string(&snapshot.media),
                Collection::Pages => serde_json::to_string(&snapshot.pages),
                Collection::Activity => serde_json::to_string(&snapshot.activity),
            },
            StoreKey::SiteConfig => serde_json::to_string(&snapshot.site_config),
            StoreKey::GlobalDesign => serde_json::to_string(&snapshot.global_design),
            StoreKey::Theme => Ok(theme_name(snapshot.theme).to_string()),
        }
    }
}

/// Key holding the persisted schema version
pub fn schema_version_key(prefix: &str) -> String {
    format!("{}schema_version", prefix)
}

pub(crate) fn theme_name(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    }
}

/// Theme values are stored bare (`dark`), older values may be JSON strings
pub(crate) fn parse_theme(raw: &str) -> Option<Theme> {
    match raw.trim().trim_matches('"') {
        "dark" => Some(Theme::Dark),
        "light" => Some(Theme::Light),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_names() {
        assert_eq!(
            StoreKey::Collection(Collection::KnowledgeBase).storage_key("myploti_"),
            "myploti_kb"
        );
        assert_eq!(StoreKey::Collection(Collection::Activity).storage_key("x_"), "x_logs");
        assert_eq!(StoreKey::SiteConfig.storage_key("myploti_"), "myploti_config");
        assert_eq!(StoreKey::Theme.storage_key("myploti_"), "theme");
        assert_eq!(schema_version_key("myploti_"), "myploti_schema_version");
    }

    #[test]
    fn test_all_keys_are_distinct() {
        let mut names: Vec<String> = StoreKey::all().iter().map(|k| k.storage_key("p_")).collect();
        let count = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), count);
        assert_eq!(count, 16);
    }

    #[test]
    fn test_theme_parsing() {
        assert_eq!(parse_theme("dark"), Some(Theme::Dark));
        assert_eq!(parse_theme("\"light\""), Some(Theme::Light));
        assert_eq!(parse_theme("blue"), None);
    }
}
