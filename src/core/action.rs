//! # Actions
//!
//! Everything that can happen in Quizcycle becomes an `Action`.
//! The timer fires? That's `Action::Tick`.
//! The user clicks a sidebar entry? That's `Action::SelectQuestion { .. }`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing any I/O the adapter should perform. No side effects
//! here beyond logging.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, error, info, warn};

use crate::core::questions::QuestionSet;
use crate::core::rotator::QuestionRotator;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The question resource was fetched and parsed.
    QuestionsLoaded(QuestionSet),
    /// Fetching or parsing the resource failed.
    LoadFailed(String),
    /// One second elapsed.
    Tick,
    NextQuestion,
    PreviousQuestion,
    SelectQuestion { topic: String, question: String },
    TogglePause,
    Quit,
}

/// Side effects requested by `update()`, carried out by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Questions are in; arm the periodic tick timer.
    StartTimer,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::QuestionsLoaded(set) => {
            if app.rotator.is_active() {
                warn!("Ignoring second question load");
                return Effect::None;
            }
            let mut entries = set.flatten();
            app.shuffle.arrange(&mut entries);
            info!(
                "Loaded {} questions across {} topics",
                entries.len(),
                set.len()
            );
            app.rotator = QuestionRotator::new(entries, app.rotator.period());
            if app.rotator.is_active() {
                app.status_message = String::new();
                Effect::StartTimer
            } else {
                warn!("Question set from {} is empty", app.source_name);
                Effect::None
            }
        }
        Action::LoadFailed(message) => {
            error!("Error fetching questions: {}", message);
            app.load_error = Some(message);
            Effect::None
        }
        Action::Tick => {
            if !app.paused && app.rotator.tick() {
                info!("Changing question...");
                log_current(app);
            }
            Effect::None
        }
        Action::NextQuestion => {
            app.rotator.advance();
            app.rotator.restart_countdown();
            log_current(app);
            Effect::None
        }
        Action::PreviousQuestion => {
            app.rotator.retreat();
            app.rotator.restart_countdown();
            log_current(app);
            Effect::None
        }
        Action::SelectQuestion { topic, question } => {
            if app.rotator.select_question(&topic, &question) {
                log_current(app);
            } else {
                warn!("No entry for ({:?}, {:?})", topic, question);
            }
            Effect::None
        }
        Action::TogglePause => {
            if app.rotator.is_active() {
                app.paused = !app.paused;
                app.status_message = if app.paused {
                    String::from("Paused")
                } else {
                    String::new()
                };
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn log_current(app: &App) {
    if let Some(entry) = app.rotator.current() {
        debug!("Current question updated: {:?}", entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::questions::{QuestionEntry, ShufflePolicy};
    use crate::core::rotator::DEFAULT_PERIOD_SECS;
    use crate::test_support::{sample_set, test_app};

    fn loaded_app() -> App {
        let mut app = test_app();
        assert_eq!(
            update(&mut app, Action::QuestionsLoaded(sample_set())),
            Effect::StartTimer
        );
        app
    }

    #[test]
    fn test_load_activates_and_starts_timer() {
        let app = loaded_app();
        assert!(!app.is_loading());
        assert_eq!(app.rotator.entries().len(), 6);
        assert_eq!(
            app.rotator.current(),
            Some(&QuestionEntry::new("math", "2+2?"))
        );
        assert_eq!(app.rotator.remaining_secs(), DEFAULT_PERIOD_SECS);
    }

    #[test]
    fn test_load_resolves_once() {
        let mut app = loaded_app();
        update(&mut app, Action::NextQuestion);
        let mut other = QuestionSet::new();
        other.insert("art", vec!["Who painted the Mona Lisa?".to_string()]);

        assert_eq!(update(&mut app, Action::QuestionsLoaded(other)), Effect::None);
        assert_eq!(app.rotator.entries().len(), 6);
        assert_eq!(app.rotator.current_index(), Some(1));
    }

    #[test]
    fn test_empty_load_stays_loading() {
        let mut app = test_app();
        let effect = update(&mut app, Action::QuestionsLoaded(QuestionSet::new()));
        assert_eq!(effect, Effect::None);
        assert!(app.is_loading());
    }

    #[test]
    fn test_load_failure_is_recorded_and_stays_loading() {
        let mut app = test_app();
        let effect = update(&mut app, Action::LoadFailed("connection refused".into()));
        assert_eq!(effect, Effect::None);
        assert!(app.is_loading());
        assert_eq!(app.load_error.as_deref(), Some("connection refused"));
        assert_eq!(app.status_message, "Loading...");
    }

    #[test]
    fn test_seeded_shuffle_applied_on_load() {
        let mut first = test_app();
        let mut second = test_app();
        first.shuffle = ShufflePolicy::Shuffle { seed: Some(7) };
        second.shuffle = ShufflePolicy::Shuffle { seed: Some(7) };
        update(&mut first, Action::QuestionsLoaded(sample_set()));
        update(&mut second, Action::QuestionsLoaded(sample_set()));
        assert_eq!(first.rotator.entries(), second.rotator.entries());
    }

    #[test]
    fn test_tick_before_load_is_noop() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Tick), Effect::None);
        assert!(app.is_loading());
        assert_eq!(app.rotator.remaining_secs(), DEFAULT_PERIOD_SECS);
    }

    #[test]
    fn test_ticks_rotate_question() {
        let mut app = loaded_app();
        for _ in 0..DEFAULT_PERIOD_SECS {
            update(&mut app, Action::Tick);
        }
        assert_eq!(app.rotator.current_index(), Some(1));
        assert_eq!(app.rotator.remaining_secs(), DEFAULT_PERIOD_SECS);
    }

    #[test]
    fn test_pause_suppresses_ticks() {
        let mut app = loaded_app();
        update(&mut app, Action::TogglePause);
        assert!(app.paused);
        assert_eq!(app.status_message, "Paused");
        for _ in 0..5 {
            update(&mut app, Action::Tick);
        }
        assert_eq!(app.rotator.remaining_secs(), DEFAULT_PERIOD_SECS);

        update(&mut app, Action::TogglePause);
        update(&mut app, Action::Tick);
        assert!(!app.paused);
        assert_eq!(app.rotator.remaining_secs(), DEFAULT_PERIOD_SECS - 1);
    }

    #[test]
    fn test_pause_ignored_while_loading() {
        let mut app = test_app();
        update(&mut app, Action::TogglePause);
        assert!(!app.paused);
    }

    #[test]
    fn test_next_and_previous_restart_countdown() {
        let mut app = loaded_app();
        update(&mut app, Action::Tick);
        update(&mut app, Action::NextQuestion);
        assert_eq!(app.rotator.current_index(), Some(1));
        assert_eq!(app.rotator.remaining_secs(), DEFAULT_PERIOD_SECS);

        update(&mut app, Action::Tick);
        update(&mut app, Action::PreviousQuestion);
        update(&mut app, Action::PreviousQuestion);
        assert_eq!(app.rotator.current_index(), Some(5));
        assert_eq!(app.rotator.remaining_secs(), DEFAULT_PERIOD_SECS);
    }

    #[test]
    fn test_select_keeps_countdown() {
        let mut app = loaded_app();
        update(&mut app, Action::Tick);
        update(
            &mut app,
            Action::SelectQuestion {
                topic: "math".into(),
                question: "What is a derivative?".into(),
            },
        );
        assert_eq!(app.rotator.current_index(), Some(2));
        assert_eq!(app.rotator.remaining_secs(), DEFAULT_PERIOD_SECS - 1);
    }

    #[test]
    fn test_select_missing_keeps_index() {
        let mut app = loaded_app();
        update(&mut app, Action::NextQuestion);
        update(
            &mut app,
            Action::SelectQuestion {
                topic: "math".into(),
                question: "missing".into(),
            },
        );
        assert_eq!(app.rotator.current_index(), Some(1));
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
