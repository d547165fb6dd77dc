use criterion::{black_box, criterion_group, criterion_main, Criterion};
use siteframe_evaluator::{Evaluator, RevealTracker};
use siteframe_schema::{PageDocument, PageSection, SectionKind, SiteSnapshot};

fn render_home(c: &mut Criterion) {
    let snapshot = SiteSnapshot::seeded();
    let evaluator = Evaluator::new();
    let reveal = RevealTracker::new();

    c.bench_function("render_home", |b| {
        b.iter(|| evaluator.render_page(black_box(&snapshot), "home", &reveal))
    });
}

fn render_every_kind(c: &mut Criterion) {
    let snapshot = SiteSnapshot::seeded();
    let mut doc = PageDocument::new_custom("all-kinds");
    doc.sections = SectionKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| PageSection::new(format!("s{}", i), *kind))
        .collect();
    let reveal = RevealTracker::all_visible(doc.sections.iter().map(|s| s.id.as_str()));
    let evaluator = Evaluator::new();

    c.bench_function("render_every_kind", |b| {
        b.iter(|| evaluator.render(black_box(&doc), &snapshot, &reveal))
    });
}

fn render_large_page(c: &mut Criterion) {
    let snapshot = SiteSnapshot::seeded();
    let mut doc = PageDocument::new_custom("long");
    doc.sections = (0..200)
        .map(|i| PageSection::new(format!("s{}", i), SectionKind::ALL[i % SectionKind::ALL.len()]))
        .collect();
    let evaluator = Evaluator::new();
    let reveal = RevealTracker::new();

    c.bench_function("render_large_page", |b| {
        b.iter(|| evaluator.render(black_box(&doc), &snapshot, &reveal))
    });
}

criterion_group!(benches, render_home, render_every_kind, render_large_page);
criterion_main!(benches);
