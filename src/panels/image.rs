//! src/panels/image.rs
//!
//! Image placeholder panel.
//!
//! A terminal cannot show raster pixels, so the image is drawn as a frame
//! titled with its alternate text. The frame is sized from the display size
//! (one cell is taken as 8x16 px) and clamped to the available area.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::Size;

const CELL_WIDTH_PX: u32 = 8;
const CELL_HEIGHT_PX: u32 = 16;

pub struct ImagePanel {
    pub file_name: &'static str,
    pub alt: &'static str,
    pub size: Size,
}

impl ImagePanel {
    pub fn new(file_name: &'static str, alt: &'static str, size: Size) -> Self {
        Self {
            file_name,
            alt,
            size,
        }
    }

    /// Frame rect for this image, centered in `area`.
    pub fn frame_rect(&self, area: Rect) -> Rect {
        let cols = self.size.width.div_ceil(CELL_WIDTH_PX).min(area.width as u32) as u16;
        let rows = self.size.height.div_ceil(CELL_HEIGHT_PX).min(area.height as u32) as u16;
        Rect {
            x: area.x + (area.width - cols) / 2,
            y: area.y + (area.height - rows) / 2,
            width: cols,
            height: rows,
        }
    }
}

impl crate::ui::Panel for ImagePanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let rect = self.frame_rect(area);
        let body = vec![
            Line::raw(self.file_name),
            Line::raw(format!("{}x{}", self.size.width, self.size.height)),
        ];
        let p = Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::default().title(self.alt).borders(Borders::ALL));
        f.render_widget(p, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> ImagePanel {
        ImagePanel::new(
            "a.png",
            "alt",
            Size {
                height: 400,
                width: 825,
            },
        )
    }

    #[test]
    fn frame_fits_when_room() {
        let r = panel().frame_rect(Rect::new(0, 0, 200, 50));
        assert_eq!((r.width, r.height), (104, 25));
        assert_eq!((r.x, r.y), (48, 12));
    }

    #[test]
    fn frame_clamps_to_area() {
        let area = Rect::new(2, 3, 40, 10);
        assert_eq!(panel().frame_rect(area), area);
    }
}
