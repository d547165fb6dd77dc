//! Rendering tests against seeded and hand-built documents

use serde_json::json;
use siteframe_evaluator::{Evaluator, RenderOptions, RevealTracker, VNode, PROJECT_GRID_LIMIT};
use siteframe_schema::{
    CollectionContent, DataSource, FaqItem, PageDocument, PageSection, Project, RichTextContent,
    SectionBody, SectionKind, SiteSnapshot, TeamMember,
};
use siteframe_store::ContentStore;

fn page_with(sections: Vec<PageSection>) -> PageDocument {
    let mut doc = PageDocument::new_custom("test-page");
    doc.sections = sections;
    doc
}

fn section(id: &str, body: SectionBody) -> PageSection {
    PageSection {
        id: id.to_string(),
        body,
        style: None,
    }
}

fn wrappers(page: &siteframe_evaluator::RenderedPage) -> Vec<&VNode> {
    page.find_by_class("fade-in-section")
}

#[test]
fn test_unknown_section_does_not_break_page() {
    let doc = page_with(vec![
        section(
            "a",
            SectionBody::RichText(RichTextContent {
                heading: Some("Before".to_string()),
                body: Some("first".to_string()),
            }),
        ),
        section(
            "b",
            SectionBody::decode("Carousel", json!({ "slides": [] })),
        ),
        section(
            "c",
            SectionBody::RichText(RichTextContent {
                heading: Some("After".to_string()),
                body: None,
            }),
        ),
    ]);

    let page = Evaluator::new().render(&doc, &SiteSnapshot::seeded(), &RevealTracker::new());

    assert_eq!(wrappers(&page).len(), 3);
    let placeholders = page.find_by_class("section-unknown");
    assert_eq!(placeholders.len(), 1);
    assert_eq!(placeholders[0].text_content(), "Unknown Section Type: Carousel");

    let text = page.text_content();
    let before = text.find("Before").unwrap();
    let unknown = text.find("Unknown Section Type").unwrap();
    let after = text.find("After").unwrap();
    assert!(before < unknown && unknown < after);
}

#[test]
fn test_project_grid_caps_projects_and_features() {
    let mut snapshot = SiteSnapshot::seeded();
    snapshot.projects = (0..8)
        .map(|i| Project {
            id: format!("p{}", i),
            title: format!("Plot {}", i),
            features: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            ..Default::default()
        })
        .collect();
    let doc = page_with(vec![section(
        "grid",
        SectionBody::ProjectGrid(CollectionContent::default()),
    )]);

    let page = Evaluator::new().render(&doc, &snapshot, &RevealTracker::new());

    let cards = page.find_by_class("project-card");
    assert_eq!(cards.len(), PROJECT_GRID_LIMIT);
    for card in cards {
        assert_eq!(card.find_by_class("project-feature").len(), 3);
    }
    assert!(page.text_content().contains("Featured Projects"));
}

#[test]
fn test_derived_sections_follow_live_store() {
    let mut store = ContentStore::in_memory().unwrap();
    store
        .insert(TeamMember {
            id: String::new(),
            name: "Wanjiru Kamau".to_string(),
            role: "Site Engineer".to_string(),
            bio: "Supervises foundations.".to_string(),
            image_url: String::new(),
        })
        .unwrap();

    let evaluator = Evaluator::new();
    let page = evaluator
        .render_page(store.snapshot(), "about", &RevealTracker::new())
        .unwrap();

    let members = page.find_by_class("team-member");
    assert_eq!(members.len(), store.snapshot().team.len());
    assert!(page.text_content().contains("Wanjiru Kamau"));
}

#[test]
fn test_inline_items_override_collection() {
    let doc = page_with(vec![section(
        "faq",
        SectionBody::Faq(CollectionContent {
            title: Some("Plot FAQs".to_string()),
            subtitle: None,
            source: DataSource::Inline {
                items: vec![FaqItem {
                    question: "Is there water?".to_string(),
                    answer: "Yes, a borehole.".to_string(),
                }],
            },
        }),
    )]);

    let page = Evaluator::new().render(&doc, &SiteSnapshot::seeded(), &RevealTracker::new());

    assert_eq!(page.find_by_class("faq-item").len(), 1);
    let text = page.text_content();
    assert!(text.contains("Plot FAQs"));
    assert!(text.contains("Is there water?"));
}

#[test]
fn test_reveal_wrappers() {
    let snapshot = SiteSnapshot::seeded();
    let doc = snapshot.page("home").unwrap();
    let mut reveal = RevealTracker::new();
    reveal.observe("s_featured", true);

    let page = Evaluator::new().render(doc, &snapshot, &reveal);
    let wrappers = wrappers(&page);

    assert_eq!(wrappers.len(), doc.sections.len());
    for (index, wrapper) in wrappers.iter().enumerate() {
        assert!(wrapper.has_class(&format!("delay-{}", index * 100)));
        let visible = doc.sections[index].id == "s_featured";
        assert_eq!(wrapper.has_class("is-visible"), visible);
    }
}

#[test]
fn test_full_bleed_and_shell() {
    let snapshot = SiteSnapshot::seeded();
    let evaluator = Evaluator::new();

    for kind in SectionKind::ALL {
        let node = evaluator.render_section(&PageSection::new("x", kind), &snapshot);
        assert_eq!(node.has_class("w-full"), kind.is_full_bleed(), "{}", kind);
        assert_eq!(node.has_class("section-shell"), !kind.is_full_bleed(), "{}", kind);
        assert!(node.find_by_class("section-unknown").is_empty(), "{}", kind);
    }
}

#[test]
fn test_authored_defaults() {
    let snapshot = SiteSnapshot::seeded();
    let mut doc = page_with(vec![
        section("why", SectionBody::default_for(SectionKind::WhyChooseUs)),
        section("how", SectionBody::decode("HowItWorks", json!({}))),
        section("teaser", SectionBody::decode("ConstructionTeaser", json!({}))),
        section("services", SectionBody::decode("ServicesGrid", json!({}))),
    ]);
    doc.meta = None;

    let page = Evaluator::with_options(RenderOptions {
        brand: "Acme Homes".to_string(),
        ..Default::default()
    })
    .render(&doc, &snapshot, &RevealTracker::new());

    assert_eq!(page.find_by_class("step").len(), 4);
    assert_eq!(page.find_by_class("service").len(), 4);
    assert_eq!(
        page.find_by_class("house-card").len(),
        snapshot.houses.len().min(3)
    );
    let text = page.text_content();
    assert!(text.contains("Browse our portfolio of prime locations."));
    assert!(text.contains("Build With Us"));
    assert!(text.contains("Acme Homes offers comprehensive construction solutions"));
    assert_eq!(page.title, format!("{} | Acme Homes", doc.title));
}

#[test]
fn test_map_uses_configured_url() {
    let snapshot = SiteSnapshot::seeded();
    let evaluator = Evaluator::with_options(RenderOptions {
        map_embed_url: "https://maps.example/embed".to_string(),
        ..Default::default()
    });

    let page = evaluator
        .render_page(&snapshot, "contact", &RevealTracker::new())
        .unwrap();
    let maps = page.find_by_class("h-96");
    assert_eq!(maps.len(), 1);
    let iframe = &maps[0].children()[0];
    assert_eq!(iframe.attr("src"), Some("https://maps.example/embed"));
    assert_eq!(iframe.attr("title"), Some("MyPloti Location"));
}

#[test]
fn test_render_is_deterministic() {
    let snapshot = SiteSnapshot::seeded();
    let evaluator = Evaluator::new();
    let reveal = RevealTracker::all_visible(["s_hero", "s_why"]);

    for id in ["home", "about", "projects_hub", "contact"] {
        let first = evaluator.render_page(&snapshot, id, &reveal).unwrap();
        let second = evaluator.render_page(&snapshot, id, &reveal).unwrap();
        assert_eq!(first, second);
    }
}
