//! # Sidebar Component
//!
//! Lists every question in the current topic. The active question is
//! highlighted; a keyboard cursor can roam the list and `Enter` jumps to
//! the entry under it. Mouse clicks are resolved with `hit_test`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SidebarState` lives in `TuiState`
//! - `Sidebar` is created each frame with borrowed state and props

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, List, ListItem, ListState, Padding};

use crate::core::rotator::Sibling;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Events emitted by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    /// Jump to the sibling at this position in the list.
    Select(usize),
}

/// Persistent state for the sidebar.
#[derive(Default)]
pub struct SidebarState {
    pub list_state: ListState,
    /// Keyboard cursor. `None` follows the active question.
    pub cursor: Option<usize>,
    /// Props from the last render, needed to move the cursor.
    len: usize,
    current: Option<usize>,
    /// Height of each rendered row, for hit testing.
    item_heights: Vec<u16>,
    list_area: Rect,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the cursor so the highlight follows the active question again.
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    fn cursor_or_current(&self) -> Option<usize> {
        self.cursor.or(self.current)
    }

    /// Map a screen cell to a list position, accounting for scroll.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        if !self.list_area.contains(Position::new(column, row)) {
            return None;
        }
        let mut y = row - self.list_area.y;
        for (position, &height) in self
            .item_heights
            .iter()
            .enumerate()
            .skip(self.list_state.offset())
        {
            if y < height {
                return Some(position);
            }
            y -= height;
        }
        None
    }
}

impl EventHandler for SidebarState {
    type Event = SidebarEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.len == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                let position = self.cursor_or_current().unwrap_or(0);
                self.cursor = Some(position.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                let position = self.cursor_or_current().map_or(0, |p| p + 1);
                self.cursor = Some(position.min(self.len - 1));
                None
            }
            TuiEvent::Submit => {
                let position = self.cursor.take()?;
                Some(SidebarEvent::Select(position))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the sidebar.
pub struct Sidebar<'a> {
    state: &'a mut SidebarState,
    topic: Option<&'a str>,
    siblings: &'a [Sibling<'a>],
}

impl<'a> Sidebar<'a> {
    pub fn new(
        state: &'a mut SidebarState,
        topic: Option<&'a str>,
        siblings: &'a [Sibling<'a>],
    ) -> Self {
        Self {
            state,
            topic,
            siblings,
        }
    }
}

impl<'a> Component for Sidebar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = format!(" Topic: {} ", self.topic.unwrap_or_default());
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title)
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);

        let state = &mut *self.state;
        state.len = self.siblings.len();
        state.current = self.siblings.iter().position(|s| s.is_current);
        if let Some(cursor) = state.cursor
            && cursor >= state.len
        {
            state.cursor = None;
        }
        let cursor = state.cursor;

        let wrap_width = usize::from(inner.width).max(1);
        let mut heights = Vec::with_capacity(self.siblings.len());
        let items: Vec<ListItem> = self
            .siblings
            .iter()
            .enumerate()
            .map(|(position, sibling)| {
                let lines: Vec<Line> = textwrap::wrap(&sibling.entry.question, wrap_width)
                    .into_iter()
                    .map(|line| Line::from(line.into_owned()))
                    .collect();
                heights.push(lines.len().max(1) as u16);

                let style = if sibling.is_current {
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else if cursor == Some(position) {
                    Style::default().fg(Color::White).add_modifier(Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(lines).style(style)
            })
            .collect();

        state.item_heights = heights;
        state.list_area = inner;
        state.list_state.select(state.cursor_or_current());

        frame.render_widget(block, area);
        frame.render_stateful_widget(List::new(items), inner, &mut state.list_state);
    }
}
