//! # Application State
//!
//! Core business state for Quizcycle. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── rotator: QuestionRotator      // entries, index, countdown
//! ├── shuffle: ShufflePolicy        // applied once when questions arrive
//! ├── paused: bool                  // ticks are ignored while set
//! ├── status_message: String        // title bar text
//! └── load_error: Option<String>    // last load failure (logged, not shown)
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::questions::ShufflePolicy;
use crate::core::rotator::QuestionRotator;

pub struct App {
    pub rotator: QuestionRotator,
    pub shuffle: ShufflePolicy,
    pub paused: bool,
    pub status_message: String,
    /// Recorded for diagnostics; the view keeps showing "Loading...".
    pub load_error: Option<String>,
    /// Where the questions come from, for the title bar.
    pub source_name: String,
}

impl App {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            rotator: QuestionRotator::empty(config.period_secs),
            shuffle: config.shuffle,
            paused: false,
            status_message: String::from("Loading..."),
            load_error: None,
            source_name: config.source.clone(),
        }
    }

    pub fn is_loading(&self) -> bool {
        !self.rotator.is_active()
    }
}
