//! Browser tests, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use siteframe_schema::SiteSnapshot;
use siteframe_wasm::{apply_mutation_js, render_page_js};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn render_page_returns_document() {
    let snapshot = serde_json::to_string(&SiteSnapshot::seeded()).unwrap();
    let html = render_page_js(&snapshot, "about").unwrap();
    assert!(html.contains("Who We Are"));
}

#[wasm_bindgen_test]
fn render_missing_page_is_an_error() {
    let snapshot = serde_json::to_string(&SiteSnapshot::seeded()).unwrap();
    assert!(render_page_js(&snapshot, "nope").is_err());
}

#[wasm_bindgen_test]
fn invalid_mutation_is_an_error() {
    assert!(apply_mutation_js("{}", "{\"Bogus\":{}}").is_err());
}
