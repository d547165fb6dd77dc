//! Fade-in-on-scroll state.
//!
//! Each section wrapper reveals the first time it intersects the viewport and
//! stays revealed. The host reports intersections; the renderer asks which
//! sections are visible.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealTracker {
    seen: BTreeSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every section already visible (static output, previews)
    pub fn all_visible<'a>(section_ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut tracker = Self::new();
        for id in section_ids {
            tracker.observe(id, true);
        }
        tracker
    }

    /// Report an intersection change. Returns true when this reveals the
    /// section for the first time; leaving the viewport never hides it again.
    pub fn observe(&mut self, section_id: &str, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        self.seen.insert(section_id.to_string())
    }

    pub fn is_visible(&self, section_id: &str) -> bool {
        self.seen.contains(section_id)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
