//! # Question Panel Component
//!
//! The main area: topic label above the current question, both centered.
//! Shows "Loading..." in place of each until questions arrive.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::tui::component::Component;

const LOADING: &str = "Loading...";

pub struct QuestionPanel<'a> {
    pub topic: Option<&'a str>,
    pub question: Option<&'a str>,
}

impl<'a> QuestionPanel<'a> {
    pub fn new(topic: Option<&'a str>, question: Option<&'a str>) -> Self {
        Self { topic, question }
    }
}

impl<'a> Component for QuestionPanel<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::uniform(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let topic = Paragraph::new(Line::from(Span::styled(
            self.topic.unwrap_or(LOADING),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);

        let question = Paragraph::new(Span::styled(
            self.question.unwrap_or(LOADING),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

        // Estimate the wrapped height so the pair can be centered vertically
        let width = usize::from(inner.width).max(1);
        let question_height = textwrap::wrap(self.question.unwrap_or(LOADING), width)
            .len()
            .max(1) as u16;

        let [topic_area, _, question_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(question_height),
        ])
        .flex(Flex::Center)
        .areas(inner);

        frame.render_widget(topic, topic_area);
        frame.render_widget(question, question_area);
    }
}
