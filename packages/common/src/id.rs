/// Timestamp-derived id generator.
///
/// Ids look like `<prefix><millis>`. Stamps are strictly increasing per
/// generator, so two records created within the same millisecond still get
/// distinct ids.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    last: i64,
    source: StampSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StampSource {
    /// Wall clock milliseconds
    Clock,
    /// Sequential counter (deterministic, for tests and replays)
    Sequence,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            last: 0,
            source: StampSource::Clock,
        }
    }

    /// Deterministic generator whose first stamp is `start`
    pub fn sequential(start: i64) -> Self {
        Self {
            last: start - 1,
            source: StampSource::Sequence,
        }
    }

    /// Next stamp (milliseconds since epoch for clock generators)
    pub fn next_stamp(&mut self) -> i64 {
        let candidate = match self.source {
            StampSource::Clock => chrono::Utc::now().timestamp_millis(),
            StampSource::Sequence => self.last + 1,
        };
        self.last = candidate.max(self.last + 1);
        self.last
    }

    /// Generate next id with a prefix
    pub fn new_id(&mut self, prefix: &str) -> String {
        format!("{}{}", prefix, self.next_stamp())
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut gen = IdGenerator::sequential(100);

        assert_eq!(gen.new_id("s-"), "s-100");
        assert_eq!(gen.new_id("s-"), "s-101");
        assert_eq!(gen.new_id("media-"), "media-102");
    }

    #[test]
    fn test_clock_ids_are_unique() {
        let mut gen = IdGenerator::new();
        let ids: Vec<String> = (0..50).map(|_| gen.new_id("")).collect();

        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }
}
