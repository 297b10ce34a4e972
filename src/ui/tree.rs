//! src/ui/tree.rs
//!
//! Immutable visual tree produced by render units.
//!
//! A tree is plain data: hosts either draw it (see `node.rs`) or serialize
//! it with `to_markup()`. Serialization is deterministic, so equal trees
//! always yield the same bytes.

use std::fmt;

/// Text colors a tree can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
}

impl Color {
    /// CSS color keyword.
    pub fn css_name(self) -> &'static str {
        match self {
            Color::White => "white",
        }
    }

    pub fn to_ratatui(self) -> ratatui::style::Color {
        match self {
            Color::White => ratatui::style::Color::White,
        }
    }
}

/// Display size in device-independent pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub height: u32,
    pub width: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element {
    Container {
        children: Vec<Element>,
    },
    Heading {
        text: &'static str,
        color: Color,
    },
    Image {
        src: &'static str,
        alt: &'static str,
        size: Size,
    },
    Footer {
        children: Vec<Element>,
    },
    Paragraph {
        text: &'static str,
    },
}

/// Root of a rendered tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualTree {
    pub root: Element,
}

impl VisualTree {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// HTML-like serialization of the whole tree.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        write_element(&mut out, &self.root);
        out
    }

    /// Depth-first walk over every element, root included.
    pub fn walk(&self) -> Vec<&Element> {
        let mut stack = vec![&self.root];
        let mut seen = Vec::new();
        while let Some(el) = stack.pop() {
            seen.push(el);
            if let Element::Container { children } | Element::Footer { children } = el {
                stack.extend(children.iter().rev());
            }
        }
        seen
    }
}

impl fmt::Display for VisualTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

fn write_element(out: &mut String, el: &Element) {
    match el {
        Element::Container { children } => {
            out.push_str("<div>");
            for c in children {
                write_element(out, c);
            }
            out.push_str("</div>");
        }
        Element::Heading { text, color } => {
            out.push_str("<h1 style=\"color:");
            out.push_str(color.css_name());
            out.push_str("\">");
            push_escaped(out, text);
            out.push_str("</h1>");
        }
        Element::Image { src, alt, size } => {
            out.push_str("<img src=\"");
            push_escaped(out, src);
            out.push_str("\" alt=\"");
            push_escaped(out, alt);
            out.push_str(&format!(
                "\" style=\"height:{}px;width:{}px\"/>",
                size.height, size.width
            ));
        }
        Element::Footer { children } => {
            out.push_str("<footer>");
            for c in children {
                write_element(out, c);
            }
            out.push_str("</footer>");
        }
        Element::Paragraph { text } => {
            out.push_str("<p>");
            push_escaped(out, text);
            out.push_str("</p>");
        }
    }
}

fn push_escaped(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
