// File: crates/dash-render-skia/src/text.rs
// Summary: Label shaping with Skia textlayout; places text by SVG anchor and baseline rules.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal anchor, mirroring SVG `text-anchor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    pub fn parse(s: &str) -> Self {
        match s {
            "middle" => Anchor::Middle,
            "end" => Anchor::End,
            _ => Anchor::Start,
        }
    }
}

/// Style of one label run.
#[derive(Clone, Copy, Debug)]
pub struct LabelStyle {
    pub size: f32,
    pub color: skia::Color,
    pub bold: bool,
    pub anchor: Anchor,
    /// `dominant-baseline: middle`: `y` is the vertical center instead of the baseline.
    pub centered: bool,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(style: &LabelStyle) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(style.size.max(1.0));
        ts.set_color(style.color);
        ts.set_font_families(&["Inter", "Segoe UI", "Arial", "Helvetica", "DejaVu Sans", "sans-serif"]);
        if style.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, style: &LabelStyle) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(style));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, style: &LabelStyle) -> f32 {
        self.layout(text, style).longest_line()
    }

    /// Draw `text` so that (`x`, `y`) is its anchor point.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, style: &LabelStyle) {
        let mut p = self.layout(text, style);
        let width = p.longest_line();
        let left = match style.anchor {
            Anchor::Start => x,
            Anchor::Middle => x - width * 0.5,
            Anchor::End => x - width,
        };
        // Paragraph draws from top-left; approximate the baseline from the font size
        let top = if style.centered { y - p.height() * 0.5 } else { y - style.size * 0.8 };
        p.paint(canvas, (left, top));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_parsing_defaults_to_start() {
        assert_eq!(Anchor::parse("middle"), Anchor::Middle);
        assert_eq!(Anchor::parse("end"), Anchor::End);
        assert_eq!(Anchor::parse("inherit"), Anchor::Start);
    }
}
