//! Autosave status indicator.
//!
//! Purely cosmetic: every write already reached the store synchronously. The
//! indicator reads "Saving..." for a short window after each change. Instants
//! are epoch milliseconds supplied by the caller so hosts without a system
//! clock (wasm) can drive it.

/// How long "Saving..." stays up after a change
pub const SAVING_WINDOW_MS: i64 = 1500;

pub const IDLE_LABEL: &str = "Autosave on";
pub const SAVING_LABEL: &str = "Saving...";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutosaveIndicator {
    last_change: Option<i64>,
}

impl AutosaveIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change now
    pub fn touch(&mut self) {
        self.touch_at(chrono::Utc::now().timestamp_millis());
    }

    /// Record a change at `now_ms`
    pub fn touch_at(&mut self, now_ms: i64) {
        self.last_change = Some(now_ms);
    }

    pub fn is_saving_at(&self, now_ms: i64) -> bool {
        match self.last_change {
            Some(at) => now_ms >= at && now_ms - at < SAVING_WINDOW_MS,
            None => false,
        }
    }

    /// Label to show at `now_ms`
    pub fn status_at(&self, now_ms: i64) -> &'static str {
        if self.is_saving_at(now_ms) {
            SAVING_LABEL
        } else {
            IDLE_LABEL
        }
    }

    pub fn status(&self) -> &'static str {
        self.status_at(chrono::Utc::now().timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_until_first_change() {
        let indicator = AutosaveIndicator::new();
        assert_eq!(indicator.status_at(0), "Autosave on");
    }

    #[test]
    fn test_saving_window() {
        let mut indicator = AutosaveIndicator::new();
        indicator.touch_at(10_000);

        assert_eq!(indicator.status_at(10_000), "Saving...");
        assert_eq!(indicator.status_at(11_499), "Saving...");
        assert_eq!(indicator.status_at(11_500), "Autosave on");
    }

    #[test]
    fn test_new_change_extends_window() {
        let mut indicator = AutosaveIndicator::new();
        indicator.touch_at(0);
        indicator.touch_at(1_000);
        assert!(indicator.is_saving_at(2_000));
    }
}
