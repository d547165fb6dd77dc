//! Bulk property import from `title,location,price,description` CSV text.

use crate::error::StoreError;
use crate::keys::StoreKey;
use crate::store::ContentStore;
use siteframe_schema::{Collection, Project, ProjectType, Purpose};
use tracing::info;

const MIN_FIELDS: usize = 4;

/// Parse projects from CSV text. The first line is a header.
///
/// Lines with fewer than four fields are skipped. A price that does not
/// start with digits imports as 0.
pub fn parse_projects_csv(text: &str, stamp: i64) -> Vec<Project> {
    text.split('\n')
        .enumerate()
        .skip(1)
        .filter_map(|(line_no, line)| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let parts: Vec<&str> = line.split(',').collect();
            if parts.len() < MIN_FIELDS {
                return None;
            }
            let price = leading_integer(parts[2]);
            Some(Project {
                id: format!("csv-{}-{}", stamp, line_no),
                title: parts[0].to_string(),
                location: parts[1].to_string(),
                price,
                price_str: format!("KES {}", thousands(price)),
                description: parts[3].to_string(),
                image_url: "https://via.placeholder.com/800".to_string(),
                images: Vec::new(),
                features: vec!["Imported".to_string()],
                kind: ProjectType::Residential,
                size: "50x100".to_string(),
                purpose: Purpose::Investment,
                amenities: Vec::new(),
                ..Default::default()
            })
        })
        .collect()
}

fn leading_integer(raw: &str) -> u64 {
    let digits: String = raw.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// `1200000` → `1,200,000`
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl ContentStore {
    /// Append projects parsed from CSV. Returns how many were imported.
    pub fn import_projects_csv(&mut self, text: &str) -> Result<usize, StoreError> {
        let stamp = self.ids.next_stamp();
        let imported = parse_projects_csv(text, stamp);
        let count = imported.len();
        info!(count, "importing projects from csv");

        self.snapshot_mut().projects.extend(imported);
        self.log_activity("Import", "Properties", &format!("Imported {} from CSV", count));
        self.commit(&[StoreKey::Collection(Collection::Projects)])?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(850000), "850,000");
        assert_eq!(thousands(1200000), "1,200,000");
    }

    #[test]
    fn test_parse_skips_header_and_short_lines() {
        let csv = "title,location,price,description\n\
                   Acacia Park,Ngong,650000,Quiet plots\n\
                   \n\
                   Broken,Line\n\
                   Palm Court,Malindi,abc,Near the beach\n";
        let projects = parse_projects_csv(csv, 77);

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].id, "csv-77-1");
        assert_eq!(projects[0].price_str, "KES 650,000");
        assert_eq!(projects[0].purpose, Purpose::Investment);
        assert_eq!(projects[1].id, "csv-77-4");
        assert_eq!(projects[1].price, 0);
    }
}
