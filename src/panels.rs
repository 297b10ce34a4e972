//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod display;
pub mod image;
pub mod paragraph;
pub mod title;
pub mod tree;

pub use display::DisplayPanel;
pub use image::ImagePanel;
pub use paragraph::ParagraphPanel;
pub use title::TitlePanel;
pub use tree::TreePanel;
