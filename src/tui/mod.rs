//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! Three producers feed the loop, all through `update()`:
//!
//! - the one-shot load task (`QuestionsLoaded` / `LoadFailed`)
//! - the `TickTimer` (`Tick`, once per second, armed after a successful load)
//! - terminal input (`Next`, `SelectQuestion`, ...)
//!
//! The loop redraws only when one of them produced something.

mod component;
mod components;
mod event;
pub mod timer;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::source::{QuestionSource, build_source};
use crate::tui::component::EventHandler;
use crate::tui::components::{SidebarEvent, SidebarState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::timer::{TICK_INTERVAL, TickTimer};

/// Upper bound on how long the loop sleeps waiting for input.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub sidebar: SidebarState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            sidebar: SidebarState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config.source);
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    spawn_load(source, tx.clone());

    // Armed once the questions arrive; dropping it cancels the interval
    let mut ticker: Option<TickTimer> = None;
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(POLL_TIMEOUT);

        // Process first event + drain pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
            let mut events = first_event
                .into_iter()
                .chain(std::iter::from_fn(poll_event_immediate));
            should_quit = apply_events(&mut events, &mut app, &mut tui);
        }

        if should_quit {
            break;
        }

        // Handle background task actions (load result, ticks)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if action != Action::Tick {
                debug!("Event loop received: {:?}", action);
            }
            let index_before = app.rotator.current_index();
            match update(&mut app, action) {
                Effect::StartTimer if ticker.is_none() => {
                    ticker = Some(TickTimer::start(TICK_INTERVAL, tx.clone()));
                }
                Effect::Quit => should_quit = true,
                _ => {}
            }
            // The cursor belongs to the old topic once the question rotates
            if app.rotator.current_index() != index_before {
                tui.sidebar.reset_cursor();
            }
        }

        if should_quit {
            break;
        }
    }

    drop(ticker);
    ratatui::restore();
    info!("Quizcycle shut down");
    Ok(())
}

/// Apply queued terminal events until one quits or moves the active question.
///
/// Clicks are hit-tested against the last drawn sidebar, so anything queued
/// behind a question change is left for the next pass, after a redraw.
/// Returns `true` when the app should quit.
fn apply_events(
    events: &mut impl Iterator<Item = TuiEvent>,
    app: &mut App,
    tui: &mut TuiState,
) -> bool {
    for event in events {
        let Some(action) = translate_event(&event, app, tui) else {
            continue;
        };
        let index_before = app.rotator.current_index();
        if update(app, action) == Effect::Quit {
            return true;
        }
        if app.rotator.current_index() != index_before {
            break;
        }
    }
    false
}

/// Map a terminal event to a core action, updating presentation state on the way.
fn translate_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Resize => None,
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Next => {
            tui.sidebar.reset_cursor();
            Some(Action::NextQuestion)
        }
        TuiEvent::Previous => {
            tui.sidebar.reset_cursor();
            Some(Action::PreviousQuestion)
        }
        TuiEvent::TogglePause => Some(Action::TogglePause),
        TuiEvent::MouseClick(column, row) => {
            let position = tui.sidebar.hit_test(*column, *row)?;
            tui.sidebar.reset_cursor();
            select_sibling(app, position)
        }
        TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::Submit => {
            match tui.sidebar.handle_event(event)? {
                SidebarEvent::Select(position) => select_sibling(app, position),
            }
        }
    }
}

fn select_sibling(app: &App, position: usize) -> Option<Action> {
    let view = app.rotator.view();
    let sibling = view.siblings.get(position)?;
    Some(Action::SelectQuestion {
        topic: sibling.entry.topic.clone(),
        question: sibling.entry.question.clone(),
    })
}

fn spawn_load(source: Arc<dyn QuestionSource>, tx: mpsc::Sender<Action>) {
    info!("Spawning question load ({})", source.name());
    tokio::spawn(async move {
        let action = match source.fetch().await {
            Ok(set) => Action::QuestionsLoaded(set),
            Err(e) => Action::LoadFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver question load result: receiver dropped");
        }
    });
}
