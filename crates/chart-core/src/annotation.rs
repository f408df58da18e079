// File: crates/chart-core/src/annotation.rs
// Summary: Layout decorations in data coordinates: shaded rectangles and boxed text labels.

use skia_safe as skia;

use crate::color::with_opacity;
use crate::render::DrawCtx;
use crate::scale::{AxisScale, ScaleTransform};
use crate::text::{HAlign, TextSpec, VAlign};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    /// Under grid lines and traces.
    Below,
    /// Over traces.
    Above,
}

/// Filled rectangle spanning `[x0, x1] x [y0, y1]` in data coordinates.
#[derive(Clone, Copy, Debug)]
pub struct Shape {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub fill: skia::Color,
    pub opacity: f32,
    pub layer: Layer,
}

impl Shape {
    pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64, fill: skia::Color) -> Self {
        Self { x0, y0, x1, y1, fill, opacity: 1.0, layer: Layer::Above }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn below(mut self) -> Self {
        self.layer = Layer::Below;
        self
    }

    /// Whether data point (x, y) lies inside the rectangle (edges inclusive).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x0.min(self.x1) && x <= self.x0.max(self.x1) && y >= self.y0.min(self.y1) && y <= self.y0.max(self.y1)
    }

    pub(crate) fn draw(&self, ctx: &DrawCtx, xs: &AxisScale, ys: &AxisScale) {
        let rect = skia::Rect::from_ltrb(xs.to_px(self.x0), ys.to_px(self.y0), xs.to_px(self.x1), ys.to_px(self.y1)).sorted();
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(with_opacity(self.fill, self.opacity));
        ctx.canvas.draw_rect(rect, &fill);
    }
}

/// Text label centred on a data point, optionally boxed.
#[derive(Clone, Debug)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub font: TextSpec,
    pub background: Option<skia::Color>,
    pub border: Option<(f32, skia::Color)>,
    pub padding: f32,
}

impl Annotation {
    pub fn new(x: f64, y: f64, text: impl Into<String>, font: TextSpec) -> Self {
        Self { x, y, text: text.into(), font, background: None, border: None, padding: 3.0 }
    }

    pub fn with_background(mut self, c: skia::Color) -> Self {
        self.background = Some(c);
        self
    }

    pub fn with_border(mut self, width: f32, c: skia::Color) -> Self {
        self.border = Some((width, c));
        self
    }

    pub(crate) fn draw(&self, ctx: &DrawCtx, xs: &AxisScale, ys: &AxisScale) {
        let Some(shaper) = ctx.text else { return };
        let (cx, cy) = (xs.to_px(self.x), ys.to_px(self.y));
        let (w, h) = shaper.measure(&self.text, &self.font);
        let rect = skia::Rect::from_ltrb(
            cx - w * 0.5 - self.padding,
            cy - h * 0.5 - self.padding,
            cx + w * 0.5 + self.padding,
            cy + h * 0.5 + self.padding,
        );
        if let Some(bg) = self.background {
            let mut fill = skia::Paint::default();
            fill.set_style(skia::paint::Style::Fill);
            fill.set_color(bg);
            ctx.canvas.draw_rect(rect, &fill);
        }
        if let Some((bw, bc)) = self.border {
            let mut stroke = skia::Paint::default();
            stroke.set_anti_alias(true);
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width(bw);
            stroke.set_color(bc);
            ctx.canvas.draw_rect(rect, &stroke);
        }
        shaper.draw(ctx.canvas, &self.text, cx, cy, &self.font, HAlign::Center, VAlign::Middle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb;

    #[test]
    fn rect_contains_is_edge_inclusive() {
        let s = Shape::rect(2.5, 2.5, 0.5, 4.5, rgb(0x1FB8CD)).with_opacity(0.15).below();
        assert!(s.contains(0.5, 4.5));
        assert!(s.contains(1.2, 4.2));
        assert!(!s.contains(3.0, 4.0));
        assert_eq!(s.layer, Layer::Below);
    }
}
