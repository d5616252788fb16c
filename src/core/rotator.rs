//! # Question Rotator
//!
//! Owns the flattened entries, the current position and the countdown.
//!
//! ```text
//!   Loading ──(non-empty load)──► Active
//!                                  │  tick: remaining -= 1
//!                                  │  remaining hits 0: advance, remaining = period
//!                                  │  select / advance / retreat: move index only
//!                                  └──► Active
//! ```
//!
//! There is no transition back to `Loading`. Every operation is a no-op
//! while `entries` is empty, so the modulo arithmetic never sees zero.

use crate::core::questions::QuestionEntry;

/// Seconds each question stays on screen unless configured otherwise.
pub const DEFAULT_PERIOD_SECS: u32 = 180;

#[derive(Debug, Clone)]
pub struct QuestionRotator {
    entries: Vec<QuestionEntry>,
    current_index: Option<usize>,
    remaining_secs: u32,
    period: u32,
}

/// One sidebar row: an entry sharing the current topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sibling<'a> {
    /// Position in the rotator's entries.
    pub index: usize,
    pub entry: &'a QuestionEntry,
    pub is_current: bool,
}

/// Read-only projection of the rotator for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationView<'a> {
    pub current_topic: Option<&'a str>,
    pub current_question: Option<&'a QuestionEntry>,
    pub siblings: Vec<Sibling<'a>>,
    pub remaining_secs: u32,
}

impl QuestionRotator {
    /// Build from already-arranged entries. A zero period is bumped to one.
    pub fn new(entries: Vec<QuestionEntry>, period: u32) -> Self {
        let period = period.max(1);
        let current_index = if entries.is_empty() { None } else { Some(0) };
        Self {
            entries,
            current_index,
            remaining_secs: period,
            period,
        }
    }

    /// The `Loading` state.
    pub fn empty(period: u32) -> Self {
        Self::new(Vec::new(), period)
    }

    pub fn is_active(&self) -> bool {
        self.current_index.is_some()
    }

    pub fn entries(&self) -> &[QuestionEntry] {
        &self.entries
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    /// One second elapsed. Returns `true` if the countdown expired and the
    /// rotator moved to the next entry.
    pub fn tick(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.advance();
            self.remaining_secs = self.period;
            return true;
        }
        false
    }

    pub fn advance(&mut self) {
        if let Some(index) = self.current_index {
            self.current_index = Some((index + 1) % self.entries.len());
        }
    }

    pub fn retreat(&mut self) {
        if let Some(index) = self.current_index {
            let len = self.entries.len();
            self.current_index = Some((index + len - 1) % len);
        }
    }

    pub fn restart_countdown(&mut self) {
        self.remaining_secs = self.period;
    }

    /// Jump to the first entry matching `topic` and `question`.
    ///
    /// The countdown is left alone. Returns `false` and keeps the current
    /// index when nothing matches.
    pub fn select_question(&mut self, topic: &str, question: &str) -> bool {
        if !self.is_active() {
            return false;
        }
        match self.entries.iter().position(|e| e.matches(topic, question)) {
            Some(index) => {
                self.current_index = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> Option<&QuestionEntry> {
        self.current_index.and_then(|index| self.entries.get(index))
    }

    pub fn view(&self) -> RotationView<'_> {
        let current_question = self.current();
        let current_topic = current_question.map(|e| e.topic.as_str());

        let siblings = match current_topic {
            Some(topic) => self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| entry.topic == topic)
                .map(|(index, entry)| Sibling {
                    index,
                    entry,
                    is_current: Some(index) == self.current_index,
                })
                .collect(),
            None => Vec::new(),
        };

        RotationView {
            current_topic,
            current_question,
            siblings,
            remaining_secs: self.remaining_secs,
        }
    }
}

/// Format seconds as `M:SS`. Minutes are not rolled into hours.
pub fn format_remaining(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
