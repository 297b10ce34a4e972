//! src/panels/title.rs
//!
//! Heading panel: one bold line in the heading's color.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::Color;

pub struct TitlePanel {
    pub text: &'static str,
    pub color: Color,
}

impl TitlePanel {
    pub fn new(text: &'static str, color: Color) -> Self {
        Self { text, color }
    }
}

impl crate::ui::Panel for TitlePanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let style = Style::default()
            .fg(self.color.to_ratatui())
            .add_modifier(Modifier::BOLD);
        let p = Paragraph::new(self.text)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
