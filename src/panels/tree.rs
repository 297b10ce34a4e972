//! src/panels/tree.rs
//!
//! Draws a `VisualTree` by mapping each element onto a panel.
//!
//! Row heights depend on the width being drawn into (footers wrap), so the
//! layout is rebuilt on every draw.

use ratatui::{Frame, layout::Constraint, layout::Rect};

use crate::assets::file_name;
use crate::panels::{ImagePanel, ParagraphPanel, TitlePanel};
use crate::ui::{Element, Node, VisualTree, column, leaf};

const HEADING_ROWS: u16 = 3;
const MIN_IMAGE_ROWS: u16 = 4;

pub struct TreePanel {
    pub tree: VisualTree,
}

impl TreePanel {
    pub fn new(tree: VisualTree) -> Self {
        Self { tree }
    }

    /// Layout for the whole tree at `width` columns.
    pub fn layout(&self, width: u16) -> Node {
        to_node(&self.tree.root, width).1
    }
}

/// Map an element to its row constraint and layout node.
fn to_node(el: &Element, width: u16) -> (Constraint, Node) {
    match el {
        Element::Container { children } => (
            Constraint::Min(0),
            column(children.iter().map(|c| to_node(c, width)).collect()),
        ),
        Element::Heading { text, color } => (
            Constraint::Length(HEADING_ROWS),
            leaf(TitlePanel::new(*text, *color)),
        ),
        Element::Image { src, alt, size } => (
            Constraint::Min(MIN_IMAGE_ROWS),
            leaf(ImagePanel::new(file_name(*src), *alt, *size)),
        ),
        Element::Footer { children } => {
            let lines = children.iter().flat_map(paragraph_lines).collect();
            let panel = ParagraphPanel::new(lines, "Footer");
            (Constraint::Length(panel.height(width)), leaf(panel))
        }
        Element::Paragraph { text } => {
            let panel = ParagraphPanel::new(vec![*text], "");
            (Constraint::Length(panel.height(width)), leaf(panel))
        }
    }
}

/// Text of every paragraph under `el`. A footer block only shows text, so
/// headings and images nested in it are skipped.
fn paragraph_lines(el: &Element) -> Vec<&'static str> {
    match el {
        Element::Paragraph { text } => vec![*text],
        Element::Container { children } | Element::Footer { children } => {
            children.iter().flat_map(paragraph_lines).collect()
        }
        Element::Heading { .. } | Element::Image { .. } => Vec::new(),
    }
}

impl crate::ui::Panel for TreePanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        self.layout(area.width).draw(f, area);
    }
}
