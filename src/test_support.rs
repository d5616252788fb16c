//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::config::ResolvedConfig;
use crate::core::questions::{QuestionSet, ShufflePolicy};
use crate::core::rotator::DEFAULT_PERIOD_SECS;
use crate::core::state::App;

/// Three topics, six questions, in a known order.
pub fn sample_set() -> QuestionSet {
    QuestionSet::from_json(
        r#"{
            "math": ["2+2?", "Is 7 prime?", "What is a derivative?"],
            "history": ["Year WW2 started?", "Who built the pyramids?"],
            "music": ["How many strings on a violin?"]
        }"#,
    )
    .expect("sample set is valid JSON")
}

pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        source: "questions.json".to_string(),
        period_secs: DEFAULT_PERIOD_SECS,
        shuffle: ShufflePolicy::Preserve,
    }
}

/// Creates an App in the `Loading` state with unshuffled ordering.
pub fn test_app() -> App {
    App::from_config(&test_config())
}
