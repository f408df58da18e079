// File: crates/chart-core/src/heatmap.rs
// Summary: Heatmap trace over x/y categories with a colour scale, per-cell text and cell gaps.

use skia_safe as skia;

use crate::color::ColorScale;
use crate::error::{RenderError, Result};
use crate::render::DrawCtx;
use crate::scale::BandScale;
use crate::text::{HAlign, TextSpec, VAlign};

#[derive(Clone, Debug)]
pub struct Heatmap {
    pub x: Vec<String>,
    /// Row labels; row 0 is drawn at the bottom.
    pub y: Vec<String>,
    /// `z[row][col]`, one row per y category.
    pub z: Vec<Vec<f64>>,
    pub text: Vec<Vec<String>>,
    pub hover: Vec<Vec<String>>,
    pub color_scale: ColorScale,
    pub zmin: Option<f64>,
    pub zmax: Option<f64>,
    pub text_size: f32,
    pub text_color: skia::Color,
    pub xgap: f32,
    pub ygap: f32,
}

impl Heatmap {
    pub fn new(x: Vec<String>, y: Vec<String>, z: Vec<Vec<f64>>, color_scale: ColorScale) -> Self {
        Self {
            x,
            y,
            z,
            text: Vec::new(),
            hover: Vec::new(),
            color_scale,
            zmin: None,
            zmax: None,
            text_size: 12.0,
            text_color: skia::Color::WHITE,
            xgap: 0.0,
            ygap: 0.0,
        }
    }

    pub fn with_text(mut self, text: Vec<Vec<String>>) -> Self {
        self.text = text;
        self
    }

    pub fn with_hover(mut self, hover: Vec<Vec<String>>) -> Self {
        self.hover = hover;
        self
    }

    pub fn with_text_font(mut self, size: f32, color: skia::Color) -> Self {
        self.text_size = size;
        self.text_color = color;
        self
    }

    pub fn with_gaps(mut self, xgap: f32, ygap: f32) -> Self {
        self.xgap = xgap;
        self.ygap = ygap;
        self
    }

    pub fn with_z_range(mut self, zmin: f64, zmax: f64) -> Self {
        self.zmin = Some(zmin);
        self.zmax = Some(zmax);
        self
    }

    /// Check that `z` is a full `y.len()` x `x.len()` grid.
    pub fn validate(&self) -> Result<()> {
        let rows = self.z.len();
        let cols = self.z.first().map(Vec::len).unwrap_or(0);
        let ragged = self.z.iter().any(|r| r.len() != self.x.len());
        if rows != self.y.len() || ragged {
            return Err(RenderError::HeatmapShape { rows, cols, y_len: self.y.len(), x_len: self.x.len() });
        }
        Ok(())
    }

    /// Colour normalisation range: explicit bounds or the finite data extent.
    pub fn z_range(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in self.z.iter().flatten().filter(|v| v.is_finite()) {
            lo = lo.min(*v);
            hi = hi.max(*v);
        }
        if !lo.is_finite() { lo = 0.0; hi = 1.0; }
        (self.zmin.unwrap_or(lo), self.zmax.unwrap_or(hi))
    }

    pub fn cell_color(&self, row: usize, col: usize) -> Option<skia::Color> {
        let v = *self.z.get(row)?.get(col)?;
        if !v.is_finite() { return None; }
        let (lo, hi) = self.z_range();
        Some(self.color_scale.map(v, lo, hi))
    }

    pub(crate) fn draw(&self, ctx: &DrawCtx, xs: &BandScale, ys: &BandScale) {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);

        let (bw, bh) = (xs.band_width(), ys.band_width());
        let spec = TextSpec::new(self.text_size, self.text_color);
        for (r, row) in self.z.iter().enumerate() {
            for c in 0..row.len() {
                let Some(color) = self.cell_color(r, c) else { continue };
                let (cx, cy) = (xs.center(c), ys.center(r));
                let half_w = ((bw - self.xgap) * 0.5).max(0.5);
                let half_h = ((bh - self.ygap) * 0.5).max(0.5);
                fill.set_color(color);
                ctx.canvas.draw_rect(skia::Rect::from_ltrb(cx - half_w, cy - half_h, cx + half_w, cy + half_h), &fill);

                if let (Some(shaper), Some(label)) = (ctx.text, self.text.get(r).and_then(|t| t.get(c))) {
                    shaper.draw(ctx.canvas, label, cx, cy, &spec, HAlign::Center, VAlign::Middle);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb;

    fn scale() -> ColorScale {
        ColorScale::new(vec![(0.0, rgb(0xDB4545)), (1.0, rgb(0x1FB8CD))])
    }

    #[test]
    fn validates_grid_shape() {
        let x = vec!["a".to_string(), "b".to_string()];
        let y = vec!["r".to_string()];
        assert!(Heatmap::new(x.clone(), y.clone(), vec![vec![0.0, 1.0]], scale()).validate().is_ok());
        assert!(Heatmap::new(x.clone(), y.clone(), vec![vec![0.0]], scale()).validate().is_err());
        assert!(Heatmap::new(x, y, vec![], scale()).validate().is_err());
    }

    #[test]
    fn colours_normalise_over_data_range() {
        let h = Heatmap::new(
            vec!["a".into(), "b".into()],
            vec!["r".into()],
            vec![vec![0.0, 3.0]],
            scale(),
        );
        assert_eq!(h.z_range(), (0.0, 3.0));
        assert_eq!(h.cell_color(0, 0), Some(rgb(0xDB4545)));
        assert_eq!(h.cell_color(0, 1), Some(rgb(0x1FB8CD)));
        assert_eq!(h.cell_color(1, 0), None);

        let fixed = h.clone().with_z_range(0.0, 6.0);
        assert_ne!(fixed.cell_color(0, 1), Some(rgb(0x1FB8CD)));
    }
}
