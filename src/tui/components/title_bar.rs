//! # TitleBar Component
//!
//! Top status bar: app name, question source, status and key hints.
//!
//! TitleBar is purely presentational. It receives all data as props and
//! has no internal state.
//!
//! The title text changes based on state:
//!
//! 1. **Status message**: `"Quizcycle (questions.json) | Paused"`
//! 2. **Default**: `"Quizcycle (questions.json)"`
//!
//! Key hints are right-aligned and dropped first on narrow terminals.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const HINTS: &str = "n next  p prev  space pause  q quit";

/// Top status bar component showing the source and status.
pub struct TitleBar {
    /// Question source (path or URL)
    pub source: String,
    /// Status message (e.g., "Loading...", "Paused")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(source: String, status_message: String) -> Self {
        Self {
            source,
            status_message,
        }
    }

    fn title_text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Quizcycle ({})", self.source)
        } else {
            format!("Quizcycle ({}) | {}", self.source, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = self.title_text();
        let hints_width = HINTS.len() as u16;

        if area.width as usize >= title_text.len() + HINTS.len() + 2 {
            let [title_area, hints_area] =
                Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)])
                    .areas(area);
            frame.render_widget(Span::raw(title_text), title_area);
            frame.render_widget(
                Span::styled(HINTS, Style::default().fg(Color::DarkGray)),
                hints_area,
            );
        } else {
            frame.render_widget(Span::raw(title_text), area);
        }
    }
}
