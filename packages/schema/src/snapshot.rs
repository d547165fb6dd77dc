use crate::entities::*;
use crate::page::PageDocument;
use crate::record::{Collection, Listed};
use crate::seed;
use serde::{Deserialize, Serialize};

/// Everything the site renders from, in one value.
///
/// The content store owns one snapshot and hands out shared references to
/// renderers; all mutation goes through the store's named operations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSnapshot {
    pub projects: Vec<Project>,
    pub houses: Vec<HouseType>,
    pub team: Vec<TeamMember>,
    pub portfolio: Vec<PortfolioItem>,
    pub testimonials: Vec<Testimonial>,
    pub partners: Vec<Partner>,
    pub stats: Vec<Stat>,
    pub faqs: Vec<FaqItem>,
    pub inquiries: Vec<Inquiry>,
    pub knowledge_base: Vec<KnowledgeBaseItem>,
    pub site_config: SiteConfig,
    pub global_design: GlobalDesign,
    pub pages: Vec<PageDocument>,
    pub media: Vec<MediaItem>,
    pub activity: Vec<ActivityEntry>,
    pub theme: Theme,
}

impl SiteSnapshot {
    /// First-run content
    pub fn seeded() -> Self {
        Self {
            projects: seed::projects(),
            houses: seed::houses(),
            team: seed::team(),
            portfolio: seed::portfolio(),
            testimonials: seed::testimonials(),
            partners: seed::partners(),
            stats: seed::stats(),
            faqs: seed::faqs(),
            inquiries: Vec::new(),
            knowledge_base: seed::knowledge_base(),
            site_config: SiteConfig::default(),
            global_design: GlobalDesign::default(),
            pages: seed::seed_pages(),
            media: Vec::new(),
            activity: Vec::new(),
            theme: Theme::default(),
        }
    }

    pub fn page(&self, id: &str) -> Option<&PageDocument> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn page_mut(&mut self, id: &str) -> Option<&mut PageDocument> {
        self.pages.iter_mut().find(|p| p.id == id)
    }

    /// Length of a collection, by tag
    pub fn count(&self, collection: Collection) -> usize {
        match collection {
            Collection::Projects => self.projects.len(),
            Collection::Houses => self.houses.len(),
            Collection::Team => self.team.len(),
            Collection::Portfolio => self.portfolio.len(),
            Collection::Testimonials => self.testimonials.len(),
            Collection::Partners => self.partners.len(),
            Collection::Stats => self.stats.len(),
            Collection::Faqs => self.faqs.len(),
            Collection::Inquiries => self.inquiries.len(),
            Collection::KnowledgeBase => self.knowledge_base.len(),
            Collection::Media => self.media.len(),
            Collection::Pages => self.pages.len(),
            Collection::Activity => self.activity.len(),
        }
    }

    /// Items of a listed type
    pub fn items<T: Listed>(&self) -> &[T] {
        T::select(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_has_system_pages() {
        let snapshot = SiteSnapshot::seeded();
        for id in seed::SYSTEM_PAGE_IDS {
            let page = snapshot.page(id).unwrap();
            assert!(page.is_system, "{} should be a system page", id);
            assert!(page.has_unique_section_ids());
        }
    }

    #[test]
    fn test_items_selects_by_type() {
        let snapshot = SiteSnapshot::seeded();
        assert_eq!(snapshot.items::<Project>().len(), snapshot.count(Collection::Projects));
        assert_eq!(snapshot.items::<FaqItem>().len(), snapshot.count(Collection::Faqs));
    }
}
