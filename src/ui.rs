//! src/ui.rs
//!
//! Top-level UI module: the visual tree value and the layout nodes that draw it.

pub mod node;
pub mod tree;

pub use node::{Node, Panel, column, leaf};
pub use tree::{Color, Element, Size, VisualTree};
