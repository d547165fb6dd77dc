use serde_json::Value;
use siteframe_compiler_html::{compile_to_html, CompileOptions};
use siteframe_editor::{PageMutation, ViewRoute};
use siteframe_evaluator::{Evaluator, RenderedPage, RevealTracker};
use siteframe_schema::{PageDocument, PageSection, SectionKind, SiteSnapshot};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn parse_snapshot(snapshot_json: &str) -> Result<SiteSnapshot, String> {
    serde_json::from_str(snapshot_json).map_err(|e| format!("Invalid snapshot: {}", e))
}

fn render_tree(snapshot_json: &str, page_id: &str, revealed: &[String]) -> Result<RenderedPage, String> {
    let snapshot = parse_snapshot(snapshot_json)?;
    let reveal = RevealTracker::all_visible(revealed.iter().map(String::as_str));
    Evaluator::new()
        .render_page(&snapshot, page_id, &reveal)
        .map_err(|e| e.to_string())
}

fn render_html(snapshot_json: &str, page_id: &str) -> Result<String, String> {
    let page = render_tree(snapshot_json, page_id, &[])?;
    compile_to_html(&page, CompileOptions::default()).map_err(|e| format!("Compile error: {}", e))
}

fn apply_mutation_json(page_json: &str, mutation_json: &str) -> Result<String, String> {
    let mut doc: PageDocument =
        serde_json::from_str(page_json).map_err(|e| format!("Invalid page: {}", e))?;
    let mutation: PageMutation =
        serde_json::from_str(mutation_json).map_err(|e| format!("Invalid mutation: {}", e))?;

    mutation.apply(&mut doc).map_err(|e| e.to_string())?;

    serde_json::to_string(&doc).map_err(|e| format!("Serialization error: {}", e))
}

fn default_section_json(type_name: &str) -> Result<String, String> {
    let kind: SectionKind = type_name.parse().map_err(|e| format!("{}", e))?;
    let mut section = serde_json::to_value(PageSection::new(String::new(), kind))
        .map_err(|e| format!("Serialization error: {}", e))?;
    if let Value::Object(fields) = &mut section {
        fields.remove("id");
    }
    Ok(section.to_string())
}

fn route_json(query: &str) -> String {
    let route = ViewRoute::from_query(query);
    serde_json::json!({
        "view": route.view.as_str(),
        "params": route.params,
    })
    .to_string()
}

/// Render a page of the snapshot to a standalone HTML document
#[wasm_bindgen(js_name = renderPage)]
pub fn render_page_js(snapshot_json: &str, page_id: &str) -> Result<String, JsValue> {
    render_html(snapshot_json, page_id).map_err(|e| JsValue::from_str(&e))
}

/// Render a page and return the virtual DOM as JSON
#[wasm_bindgen(js_name = renderPageTree)]
pub fn render_page_tree_js(snapshot_json: &str, page_id: &str, revealed: Vec<String>) -> Result<String, JsValue> {
    let page = render_tree(snapshot_json, page_id, &revealed).map_err(|e| JsValue::from_str(&e))?;
    serde_json::to_string(&page).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Apply one builder mutation to a page document
#[wasm_bindgen(js_name = applyMutation)]
pub fn apply_mutation_js(page_json: &str, mutation_json: &str) -> Result<String, JsValue> {
    apply_mutation_json(page_json, mutation_json).map_err(|e| JsValue::from_str(&e))
}

/// Default type, content and style for a new section
#[wasm_bindgen(js_name = defaultSection)]
pub fn default_section_js(type_name: &str) -> Result<String, JsValue> {
    default_section_json(type_name).map_err(|e| JsValue::from_str(&e))
}

/// Names of every section type, in menu order
#[wasm_bindgen(js_name = sectionTypes)]
pub fn section_types_js() -> Vec<String> {
    SectionKind::ALL.iter().map(|k| k.name().to_string()).collect()
}

/// Parse a "?view=..&type=.." query string
#[wasm_bindgen(js_name = parseRoute)]
pub fn parse_route_js(query: &str) -> String {
    route_json(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seeded_json() -> String {
        serde_json::to_string(&SiteSnapshot::seeded()).unwrap()
    }

    #[test]
    fn test_render_seeded_home() {
        let html = render_html(&seeded_json(), "home").unwrap();
        assert!(html.contains("<title>Home | MyPloti</title>"));
        assert!(html.contains("Building Dreams Into Homes."));
    }

    #[test]
    fn test_render_missing_page() {
        let err = render_html(&seeded_json(), "nope").unwrap_err();
        assert!(err.contains("nope"));
    }

    #[test]
    fn test_render_tree_marks_revealed() {
        let page = render_tree(&seeded_json(), "contact", &["s_map".to_string()]).unwrap();
        let wrappers = page.find_by_class("fade-in-section");
        assert_eq!(wrappers.len(), 2);
        assert!(!wrappers[0].has_class("is-visible"));
        assert!(wrappers[1].has_class("is-visible"));
    }

    #[test]
    fn test_apply_mutation() {
        let page = serde_json::to_string(&PageDocument::new_custom("promo")).unwrap();
        let mutation = json!({
            "AddSection": { "section_id": "s2", "kind": "Map" }
        });
        let updated = apply_mutation_json(&page, &mutation.to_string());

        match updated {
            Ok(updated) => {
                let doc: PageDocument = serde_json::from_str(&updated).unwrap();
                assert_eq!(doc.sections.len(), 2);
                assert_eq!(doc.sections[1].kind(), Some(SectionKind::Map));
            }
            Err(err) => panic!("mutation failed: {}", err),
        }
    }

    #[test]
    fn test_default_section() {
        let section: Value = serde_json::from_str(&default_section_json("CallToAction").unwrap()).unwrap();
        assert_eq!(section["type"], "CallToAction");
        assert!(section.get("id").is_none());
        assert!(default_section_json("Carousel").is_err());
    }

    #[test]
    fn test_section_types() {
        let names = section_types_js();
        assert_eq!(names.len(), 14);
        assert!(names.contains(&"FAQ".to_string()));
    }

    #[test]
    fn test_parse_route() {
        let route: Value = serde_json::from_str(&parse_route_js("?view=properties&type=Land")).unwrap();
        assert_eq!(route["view"], "properties");
        assert_eq!(route["params"]["type"], "Land");
    }
}
