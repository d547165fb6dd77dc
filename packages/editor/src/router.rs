//! View selection.
//!
//! Not a URL router: the current screen is one [`View`] value. The query
//! string is read once at startup for deep links; navigating afterwards
//! never writes it back.

use serde_json::{Map, Value};
use siteframe_schema::{PageDocument, SiteSnapshot};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Properties,
    PropertyDetails,
    HouseDetails,
    ProjectsHub,
    ServiceConstruction,
    ServiceInteriors,
    ServiceLandscaping,
    ServiceWalls,
    Process,
    About,
    Contact,
    Admin,
    Legal,
    /// Any other name; shows the page document with that id if one exists
    Page(String),
}

impl View {
    const FIXED: [View; 14] = [
        View::Home,
        View::Properties,
        View::PropertyDetails,
        View::HouseDetails,
        View::ProjectsHub,
        View::ServiceConstruction,
        View::ServiceInteriors,
        View::ServiceLandscaping,
        View::ServiceWalls,
        View::Process,
        View::About,
        View::Contact,
        View::Admin,
        View::Legal,
    ];

    pub fn parse(name: &str) -> View {
        View::FIXED
            .iter()
            .find(|view| view.as_str() == name)
            .cloned()
            .unwrap_or_else(|| View::Page(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            View::Home => "home",
            View::Properties => "properties",
            View::PropertyDetails => "property_details",
            View::HouseDetails => "house_details",
            View::ProjectsHub => "projects_hub",
            View::ServiceConstruction => "service_construction",
            View::ServiceInteriors => "service_interiors",
            View::ServiceLandscaping => "service_landscaping",
            View::ServiceWalls => "service_walls",
            View::Process => "process",
            View::About => "about",
            View::Contact => "contact",
            View::Admin => "admin",
            View::Legal => "legal",
            View::Page(slug) => slug,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current view plus its parameters
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewRoute {
    pub view: View,
    pub params: Map<String, Value>,
}

impl ViewRoute {
    /// Deep link from a query string such as `?view=legal&type=privacy`.
    /// `type` is only honoured alongside `view`.
    pub fn from_query(query: &str) -> Self {
        let mut route = ViewRoute::default();
        let pairs: Vec<(&str, &str)> = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .collect();
        let lookup = |key: &str| {
            pairs
                .iter()
                .find(|(k, v)| *k == key && !v.is_empty())
                .map(|(_, v)| decode_component(v))
        };

        if let Some(view) = lookup("view") {
            route.view = View::parse(&view);
            if let Some(kind) = lookup("type") {
                route.params.insert("type".to_string(), Value::String(kind));
            }
        }
        route
    }

    /// Switch screens; parameters are replaced, never merged
    pub fn navigate(&mut self, view: View, params: Option<Map<String, Value>>) {
        self.view = view;
        self.params = params.unwrap_or_default();
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(Value::as_str)
    }

    /// Page document shown for the current view, if it names one
    pub fn resolve_page<'a>(&self, snapshot: &'a SiteSnapshot) -> Option<&'a PageDocument> {
        match &self.view {
            View::Page(slug) => snapshot.page(slug),
            _ => None,
        }
    }
}

/// `+` and `%XX` decoding for query values
fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => match hex_byte(&bytes[i + 1..i + 3]) {
                Some(byte) => {
                    out.push(byte);
                    i += 2;
                }
                None => out.push(b'%'),
            },
            other => out.push(other),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_byte(digits: &[u8]) -> Option<u8> {
    if !digits.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let digits = std::str::from_utf8(digits).ok()?;
    u8::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_and_dynamic_views() {
        assert_eq!(View::parse("service_walls"), View::ServiceWalls);
        assert_eq!(View::parse("careers"), View::Page("careers".to_string()));
        assert_eq!(View::Page("careers".to_string()).as_str(), "careers");
    }

    #[test]
    fn test_deep_link() {
        let route = ViewRoute::from_query("?view=legal&type=privacy");
        assert_eq!(route.view, View::Legal);
        assert_eq!(route.param("type"), Some("privacy"));

        let route = ViewRoute::from_query("?type=privacy");
        assert_eq!(route.view, View::Home);
        assert!(route.params.is_empty());
    }

    #[test]
    fn test_navigate_replaces_params() {
        let mut route = ViewRoute::from_query("view=contact&type=Site%20Visit");
        assert_eq!(route.param("type"), Some("Site Visit"));

        route.navigate(View::About, None);
        assert_eq!(route.view, View::About);
        assert!(route.params.is_empty());
    }

    #[test]
    fn test_malformed_escapes_stay_literal() {
        assert_eq!(decode_component("%41%62"), "Ab");
        assert_eq!(decode_component("a%+1b"), "a% 1b");
        assert_eq!(decode_component("%-1"), "%-1");
        assert_eq!(decode_component("%4G"), "%4G");
        assert_eq!(decode_component("50%"), "50%");
    }

    #[test]
    fn test_resolve_dynamic_page() {
        let mut snapshot = SiteSnapshot::seeded();
        snapshot.pages.push(PageDocument::new_custom("careers"));

        let route = ViewRoute::from_query("?view=careers");
        assert_eq!(route.resolve_page(&snapshot).map(|p| p.id.as_str()), Some("careers"));

        // fixed screens win over a page document of the same name
        let route = ViewRoute::from_query("?view=projects_hub");
        assert!(route.resolve_page(&snapshot).is_none());

        let route = ViewRoute::from_query("?view=missing");
        assert!(route.resolve_page(&snapshot).is_none());
    }
}
