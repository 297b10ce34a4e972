//! src/panels/paragraph.rs
//!
//! Bordered block of wrapped lines, used for footers and the key hint.

use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

const BORDER: u16 = 2;

pub struct ParagraphPanel {
    pub lines: Vec<&'static str>,
    pub title: &'static str,
}

impl ParagraphPanel {
    pub fn new(lines: Vec<&'static str>, title: &'static str) -> Self {
        Self { lines, title }
    }

    fn text(&self) -> Paragraph<'static> {
        let lines: Vec<Line<'static>> = self.lines.iter().map(|l| Line::raw(*l)).collect();
        Paragraph::new(lines).wrap(Wrap { trim: true })
    }

    /// Rows needed to show every wrapped line inside the border when the
    /// panel is `width` columns wide.
    pub fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(BORDER).max(1);
        let rows = self.text().line_count(inner);
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(BORDER)
    }
}

impl crate::ui::Panel for ParagraphPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let p = self
            .text()
            .block(Block::default().title(self.title).borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
