// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; anchored and rotated drawing.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

/// Font size, colour and weight for one piece of text.
#[derive(Clone, Copy, Debug)]
pub struct TextSpec {
    pub size: f32,
    pub color: skia::Color,
    pub bold: bool,
}

impl TextSpec {
    pub fn new(size: f32, color: skia::Color) -> Self {
        Self { size, color, bold: false }
    }
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
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
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(spec: &TextSpec) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(spec.size.max(1.0));
        ts.set_color(spec.color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        if spec.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    /// Lay out `text` (may contain newlines); lines are aligned within the longest one.
    pub fn layout(&self, text: &str, spec: &TextSpec, align: HAlign) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(match align {
            HAlign::Left => TextAlign::Left,
            HAlign::Center => TextAlign::Center,
            HAlign::Right => TextAlign::Right,
        });
        let mut builder = ParagraphBuilder::new(&pstyle, self.fonts.clone());
        builder.push_style(&Self::make_style(spec));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        if align != HAlign::Left {
            let w = paragraph.longest_line().ceil() + 1.0;
            paragraph.layout(w);
        }
        paragraph
    }

    /// Width of the longest line and total height.
    pub fn measure(&self, text: &str, spec: &TextSpec) -> (f32, f32) {
        let p = self.layout(text, spec, HAlign::Left);
        (p.longest_line(), p.height())
    }

    /// Draw `text` so that its box is anchored at (x, y).
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, spec: &TextSpec, h: HAlign, v: VAlign) {
        let p = self.layout(text, spec, h);
        // aligned paragraphs occupy their whole layout width
        let w = if h == HAlign::Left { p.longest_line() } else { p.max_width() };
        let ht = p.height();
        let left = match h {
            HAlign::Left => x,
            HAlign::Center => x - w * 0.5,
            HAlign::Right => x - w,
        };
        let top = match v {
            VAlign::Top => y,
            VAlign::Middle => y - ht * 0.5,
            VAlign::Bottom => y - ht,
        };
        p.paint(canvas, (left, top));
    }

    /// Draw `text` rotated by `degrees` (clockwise) about (x, y), with the unrotated box
    /// anchored by `h`/`v` at that point.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_rotated(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, spec: &TextSpec, degrees: f32, h: HAlign, v: VAlign) {
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(degrees, None);
        self.draw(canvas, text, 0.0, 0.0, spec, h, v);
        canvas.restore();
    }
}
