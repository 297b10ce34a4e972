//! src/panels/display.rs
//!
//! The architecture display panel: a heading, the architecture diagram and a
//! credit footer. Everything it shows is fixed; `render()` returns the same
//! tree on every call.

use crate::assets::AssetPath;
use crate::ui::{Color, Element, Size, VisualTree};

pub const TITLE: &str = "AWS 3-TIER WEB APPLICATION DEMO";
pub const TITLE_COLOR: Color = Color::White;
pub const IMAGE_ALT: &str = "3T Web App Architecture";
pub const IMAGE_SIZE: Size = Size {
    height: 400,
    width: 825,
};
pub const ATTRIBUTION: &str = "By: Omar Mahmood \"omxa.github.io\"";

/// Stateless render unit bound to the architecture image asset.
#[derive(Clone, Copy, Debug)]
pub struct DisplayPanel {
    image: AssetPath,
}

impl DisplayPanel {
    pub fn new(image: AssetPath) -> Self {
        Self { image }
    }

    pub fn render(&self) -> VisualTree {
        VisualTree::new(Element::Container {
            children: vec![
                Element::Heading {
                    text: TITLE,
                    color: TITLE_COLOR,
                },
                Element::Image {
                    src: self.image.path,
                    alt: IMAGE_ALT,
                    size: IMAGE_SIZE,
                },
                Element::Footer {
                    children: vec![Element::Paragraph { text: ATTRIBUTION }],
                },
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetManifest;
    use crate::panels::TreePanel;
    use crate::ui::Panel;
    use ratatui::{Terminal, backend::TestBackend};

    fn panel() -> DisplayPanel {
        DisplayPanel::new(AssetManifest::bundled().architecture)
    }

    #[test]
    fn render_is_deterministic() {
        let p = panel();
        let first = p.render();
        for _ in 0..3 {
            let again = p.render();
            assert_eq!(again, first);
            assert_eq!(again.to_markup().as_bytes(), first.to_markup().as_bytes());
        }
        // A fresh panel from the same manifest renders the same bytes.
        assert_eq!(panel().render().to_markup(), first.to_markup());
    }

    #[test]
    fn tree_shape_and_contents() {
        let tree = panel().render();
        let Element::Container { children } = &tree.root else {
            panic!("root is not a container: {:?}", tree.root);
        };
        assert_eq!(children.len(), 3);

        match &children[0] {
            Element::Heading { text, color } => {
                assert_eq!(*text, "AWS 3-TIER WEB APPLICATION DEMO");
                assert_eq!(color.css_name(), "white");
            }
            other => panic!("expected heading, got {:?}", other),
        }

        match &children[1] {
            Element::Image { src, alt, size } => {
                assert_eq!(*alt, "3T Web App Architecture");
                assert_eq!(size.height, 400);
                assert_eq!(size.width, 825);
                assert!(src.ends_with("3TierArch.png"));
            }
            other => panic!("expected image, got {:?}", other),
        }

        match &children[2] {
            Element::Footer { children } => {
                assert_eq!(
                    children.as_slice(),
                    [Element::Paragraph {
                        text: r#"By: Omar Mahmood "omxa.github.io""#
                    }]
                );
            }
            other => panic!("expected footer, got {:?}", other),
        }
    }

    #[test]
    fn markup_carries_fixed_attributes() {
        let markup = panel().render().to_markup();
        assert!(markup.starts_with(
            "<div><h1 style=\"color:white\">AWS 3-TIER WEB APPLICATION DEMO</h1><img src=\""
        ));
        assert!(markup.ends_with(
            "3TierArch.png\" alt=\"3T Web App Architecture\" style=\"height:400px;width:825px\"/>\
             <footer><p>By: Omar Mahmood &quot;omxa.github.io&quot;</p></footer></div>"
        ));
    }

    fn screen_sized(tree: VisualTree, width: u16, height: u16) -> String {
        let panel = TreePanel::new(tree);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| panel.draw(f, f.area())).unwrap();
        let buf = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn screen(tree: VisualTree) -> String {
        screen_sized(tree, 120, 40)
    }

    #[test]
    fn terminal_shows_title_image_and_footer() {
        let text = screen(panel().render());
        assert!(text.contains("AWS 3-TIER WEB APPLICATION DEMO"));
        assert!(text.contains("3T Web App Architecture"));
        assert!(text.contains("3TierArch.png"));
        assert!(text.contains("825x400"));
        assert!(text.contains(r#"By: Omar Mahmood "omxa.github.io""#));
    }

    #[test]
    fn narrow_terminal_wraps_whole_attribution() {
        let text = screen_sized(panel().render(), 30, 12);
        assert!(text.contains("By: Omar Mahmood"));
        assert!(text.contains(r#""omxa.github.io""#));
    }

    #[test]
    fn redraw_after_refresh_is_identical() {
        let p = panel();
        assert_eq!(screen(p.render()), screen(p.render()));
    }
}
