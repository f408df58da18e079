// File: crates/chart-core/src/legend.rs
// Summary: Legend entries and placement (right column or centred row above the plot).

use skia_safe as skia;

use crate::geometry::RectF;
use crate::render::DrawCtx;
use crate::text::{HAlign, TextSpec, VAlign};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LegendPosition {
    Hidden,
    /// Vertical column right of the plot area.
    #[default]
    Right,
    /// Horizontal row centred above the plot area.
    TopCenter,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Swatch {
    Line { color: skia::Color, marker: bool },
    Box(skia::Color),
    Dot(skia::Color),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub swatch: Swatch,
}

const SWATCH_W: f32 = 28.0;
const GAP: f32 = 18.0;

fn text_size(ctx: &DrawCtx, label: &str, spec: &TextSpec) -> (f32, f32) {
    match ctx.text {
        Some(shaper) => shaper.measure(label, spec),
        None => {
            let lines = label.lines().count().max(1) as f32;
            let longest = label.lines().map(|l| l.chars().count()).max().unwrap_or(0) as f32;
            (longest * spec.size * 0.55, lines * spec.size * 1.2)
        }
    }
}

fn draw_swatch(canvas: &skia::Canvas, swatch: Swatch, x: f32, cy: f32) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    match swatch {
        Swatch::Line { color, marker } => {
            paint.set_style(skia::paint::Style::Stroke);
            paint.set_stroke_width(2.5);
            paint.set_color(color);
            canvas.draw_line((x, cy), (x + SWATCH_W - 6.0, cy), &paint);
            if marker {
                paint.set_style(skia::paint::Style::Fill);
                canvas.draw_circle((x + (SWATCH_W - 6.0) * 0.5, cy), 3.5, &paint);
            }
        }
        Swatch::Box(color) => {
            paint.set_style(skia::paint::Style::Fill);
            paint.set_color(color);
            canvas.draw_rect(skia::Rect::from_ltrb(x + 4.0, cy - 6.0, x + 16.0, cy + 6.0), &paint);
        }
        Swatch::Dot(color) => {
            paint.set_style(skia::paint::Style::Fill);
            paint.set_color(color);
            canvas.draw_circle((x + 10.0, cy), 6.0, &paint);
        }
    }
}

/// Draw `entries` around `plot`; `right_reserve` is the space already used right of the plot.
pub(crate) fn draw_legend(ctx: &DrawCtx, entries: &[LegendEntry], position: LegendPosition, plot: RectF, right_reserve: f32) {
    if entries.is_empty() || position == LegendPosition::Hidden { return; }
    let spec = TextSpec::new(ctx.theme.font_size, ctx.theme.legend_text);
    let sizes: Vec<(f32, f32)> = entries.iter().map(|e| text_size(ctx, &e.label, &spec)).collect();

    match position {
        LegendPosition::Hidden => {}
        LegendPosition::TopCenter => {
            let total: f32 = sizes.iter().map(|(w, _)| SWATCH_W + w + GAP).sum::<f32>() - GAP;
            let row_h = sizes.iter().map(|(_, h)| *h).fold(spec.size * 1.2, f32::max);
            let mut x = plot.center().0 - total * 0.5;
            let cy = plot.top - 10.0 - row_h * 0.5;
            for (e, (w, _)) in entries.iter().zip(&sizes) {
                draw_swatch(ctx.canvas, e.swatch, x, cy);
                if let Some(shaper) = ctx.text {
                    shaper.draw(ctx.canvas, &e.label, x + SWATCH_W, cy, &spec, HAlign::Left, VAlign::Middle);
                }
                x += SWATCH_W + w + GAP;
            }
        }
        LegendPosition::Right => {
            let x = plot.right + right_reserve + 12.0;
            let mut y = plot.top;
            for (e, (_, h)) in entries.iter().zip(&sizes) {
                let row_h = h.max(spec.size * 1.4);
                let cy = y + row_h * 0.5;
                draw_swatch(ctx.canvas, e.swatch, x, cy);
                if let Some(shaper) = ctx.text {
                    shaper.draw(ctx.canvas, &e.label, x + SWATCH_W, cy, &spec, HAlign::Left, VAlign::Middle);
                }
                y += row_h + 6.0;
            }
        }
    }
}
