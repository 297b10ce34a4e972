//! src/ui/node.rs
//!
//! Layout nodes and the Panel trait used to put a visual tree on screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Panel trait: any renderable surface implements this.
pub trait Panel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect);
}

/// Layout tree rebuilt every frame. Each child of a `Split` owns the
/// constraint that sizes it.
pub enum Node {
    Split {
        direction: Direction,
        children: Vec<(Constraint, Node)>,
    },
    Leaf(Box<dyn Panel>),
}

impl Node {
    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        match self {
            Node::Split {
                direction,
                children,
            } => {
                let chunks = Layout::default()
                    .direction(*direction)
                    .constraints(children.iter().map(|(c, _)| *c))
                    .split(area);
                for ((_, child), chunk) in children.iter().zip(chunks.iter()) {
                    child.draw(f, *chunk);
                }
            }
            Node::Leaf(panel) => panel.draw(f, area),
        }
    }
}

/// Stack rows top to bottom.
pub fn column(children: Vec<(Constraint, Node)>) -> Node {
    Node::Split {
        direction: Direction::Vertical,
        children,
    }
}

pub fn leaf(panel: impl Panel + 'static) -> Node {
    Node::Leaf(Box::new(panel))
}
