//! # Countdown Component
//!
//! Small boxed `M:SS` display pinned to the top-right of the question panel.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::rotator::format_remaining;
use crate::tui::component::Component;

pub struct Countdown {
    pub remaining_secs: u32,
    pub paused: bool,
}

impl Countdown {
    pub fn new(remaining_secs: u32, paused: bool) -> Self {
        Self {
            remaining_secs,
            paused,
        }
    }

    /// Width needed for the text plus borders and a space either side.
    pub fn width(&self) -> u16 {
        format_remaining(self.remaining_secs).len() as u16 + 4
    }

    pub const HEIGHT: u16 = 3;
}

impl Component for Countdown {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.paused {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        let paragraph = Paragraph::new(format_remaining(self.remaining_secs))
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
        frame.render_widget(paragraph, area);
    }
}
