//! Blocking user dialogs.
//!
//! The builder and admin surface ask before destructive actions and report
//! collisions through these calls. Hosts supply an implementation (a browser
//! `confirm`/`alert`, a terminal prompt); [`ScriptedDialogs`] answers from a
//! fixed script and records every message.

use std::collections::VecDeque;

pub trait Dialogs {
    /// Yes/no question; `true` proceeds
    fn confirm(&mut self, message: &str) -> bool;

    /// Informational message that blocks until dismissed
    fn alert(&mut self, message: &str);

    /// Free text answer; `None` when dismissed
    fn prompt(&mut self, message: &str) -> Option<String>;
}

/// Pre-recorded answers
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    /// Answer for every `confirm` once `confirms` is exhausted
    pub default_confirm: bool,
    confirms: VecDeque<bool>,
    prompts: VecDeque<Option<String>>,
    /// Every message shown, in order
    pub shown: Vec<String>,
}

impl ScriptedDialogs {
    /// Dialogs that confirm everything
    pub fn accepting() -> Self {
        Self {
            default_confirm: true,
            ..Default::default()
        }
    }

    /// Dialogs that decline everything
    pub fn declining() -> Self {
        Self::default()
    }

    pub fn with_confirm(mut self, answer: bool) -> Self {
        self.confirms.push_back(answer);
        self
    }

    pub fn with_prompt(mut self, answer: Option<&str>) -> Self {
        self.prompts.push_back(answer.map(str::to_string));
        self
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&mut self, message: &str) -> bool {
        self.shown.push(message.to_string());
        self.confirms.pop_front().unwrap_or(self.default_confirm)
    }

    fn alert(&mut self, message: &str) {
        self.shown.push(message.to_string());
    }

    fn prompt(&mut self, message: &str) -> Option<String> {
        self.shown.push(message.to_string());
        self.prompts.pop_front().flatten()
    }
}
