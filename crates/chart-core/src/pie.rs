// File: crates/chart-core/src/pie.rs
// Summary: Pie/donut trace: slice geometry, percentage labels and uniform-size label hiding.

use skia_safe as skia;

use crate::geometry::RectF;
use crate::render::DrawCtx;
use crate::text::{HAlign, TextSpec, VAlign};

/// Slices start at 12 o'clock (Skia measures from 3 o'clock, clockwise).
const START_DEG: f32 = -90.0;

#[derive(Clone, Debug)]
pub struct Pie {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Hole radius as a fraction of the outer radius.
    pub hole: f32,
    /// Uniform label size; labels that do not fit at this size are hidden.
    pub text_size: f32,
    pub show_label: bool,
    pub show_percent: bool,
}

/// Angular extent of one slice, in Skia degrees; sweeps are negative (counterclockwise).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slice {
    pub index: usize,
    pub start_deg: f32,
    pub sweep_deg: f32,
    pub fraction: f64,
}

impl Slice {
    pub fn mid_deg(&self) -> f32 { self.start_deg + self.sweep_deg * 0.5 }
}

impl Pie {
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>, values: Vec<f64>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            values,
            hole: 0.0,
            text_size: 14.0,
            show_label: true,
            show_percent: true,
        }
    }

    pub fn with_hole(mut self, hole: f32) -> Self {
        self.hole = hole.clamp(0.0, 0.95);
        self
    }

    pub fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    /// Sum of the non-negative values.
    pub fn total(&self) -> f64 {
        self.values.iter().filter(|v| **v > 0.0).sum()
    }

    /// Share of each value in percent; all zeros when the total is zero.
    pub fn percentages(&self) -> Vec<f64> {
        let total = self.total();
        self.values
            .iter()
            .map(|v| if total > 0.0 && *v > 0.0 { v / total * 100.0 } else { 0.0 })
            .collect()
    }

    /// Counterclockwise slices from 12 o'clock in input order; empty slices are skipped.
    pub fn slices(&self) -> Vec<Slice> {
        let total = self.total();
        if total <= 0.0 { return Vec::new(); }
        let mut start = START_DEG;
        let mut out = Vec::with_capacity(self.values.len());
        for (index, v) in self.values.iter().enumerate() {
            if *v <= 0.0 { continue; }
            let fraction = v / total;
            let sweep = -(fraction * 360.0) as f32;
            out.push(Slice { index, start_deg: start, sweep_deg: sweep, fraction });
            start += sweep;
        }
        out
    }

    /// Text drawn inside slice `i`, e.g. "Direct\n38.9%".
    pub fn slice_text(&self, i: usize) -> String {
        let pct = self.percentages().get(i).copied().unwrap_or(0.0);
        let label = self.labels.get(i).map(String::as_str).unwrap_or("");
        match (self.show_label, self.show_percent) {
            (true, true) => format!("{label}\n{}", format_percent(pct)),
            (true, false) => label.to_string(),
            (false, true) => format_percent(pct),
            (false, false) => String::new(),
        }
    }

    /// Geometry of the pie inside `area`: centre, outer and inner radius.
    pub fn geometry(&self, area: RectF) -> ((f32, f32), f32, f32) {
        let r = (area.width().min(area.height()) * 0.5).max(1.0);
        (area.center(), r, r * self.hole)
    }

    pub(crate) fn draw(&self, ctx: &DrawCtx, area: RectF) {
        let ((cx, cy), r_out, r_in) = self.geometry(area);
        let outer = skia::Rect::from_ltrb(cx - r_out, cy - r_out, cx + r_out, cy + r_out);
        let inner = skia::Rect::from_ltrb(cx - r_in, cy - r_in, cx + r_in, cy + r_in);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);

        let slices = self.slices();
        for s in &slices {
            // a lone slice would be a zero-length arc
            let sweep = s.sweep_deg.max(-359.99);
            let mut path = skia::Path::new();
            path.arc_to(outer, s.start_deg, sweep, true);
            if r_in > 0.0 {
                path.arc_to(inner, s.start_deg + sweep, -sweep, false);
            } else {
                path.line_to((cx, cy));
            }
            path.close();
            fill.set_color(ctx.theme.trace_color(s.index));
            ctx.canvas.draw_path(&path, &fill);
        }

        let Some(shaper) = ctx.text else { return };
        for s in &slices {
            let text = self.slice_text(s.index);
            if text.is_empty() { continue; }
            let spec = TextSpec::new(self.text_size, contrast_text(ctx.theme.trace_color(s.index)));
            let (w, h) = shaper.measure(&text, &spec);
            if !label_fits(w, h, s, r_out, r_in) { continue; }
            let rm = if r_in > 0.0 { (r_out + r_in) * 0.5 } else { r_out * 0.6 };
            let a = s.mid_deg().to_radians();
            shaper.draw(ctx.canvas, &text, cx + rm * a.cos(), cy + rm * a.sin(), &spec, HAlign::Center, VAlign::Middle);
        }
    }
}

/// Percent text with three significant digits and no trailing zeros:
/// "38.9%", "8.73%", "12%", "100%".
pub fn format_percent(p: f64) -> String {
    let digits = if p >= 99.95 {
        format!("{:.0}", p)
    } else if p >= 9.995 {
        format!("{:.1}", p)
    } else {
        format!("{:.2}", p)
    };
    let trimmed = if digits.contains('.') { digits.trim_end_matches('0').trim_end_matches('.') } else { digits.as_str() };
    format!("{trimmed}%")
}

/// Whether a `w` x `h` label fits inside the slice: its width within the ring
/// thickness and its height within the chord at the label radius.
pub fn label_fits(w: f32, h: f32, slice: &Slice, r_out: f32, r_in: f32) -> bool {
    let thickness = if r_in > 0.0 { r_out - r_in } else { r_out };
    let rm = if r_in > 0.0 { (r_out + r_in) * 0.5 } else { r_out * 0.6 };
    let half = (slice.sweep_deg.abs().min(180.0) * 0.5).to_radians();
    let chord = 2.0 * rm * half.sin();
    w <= thickness && h <= chord
}

fn contrast_text(bg: skia::Color) -> skia::Color {
    let lum = 0.299 * bg.r() as f32 + 0.587 * bg.g() as f32 + 0.114 * bg.b() as f32;
    if lum < 150.0 { skia::Color::WHITE } else { skia::Color::from_argb(255, 0x2A, 0x3F, 0x5F) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources() -> Pie {
        Pie::new(["Direct", "Google Organic", "Facebook", "Wix Email", "Bing"], vec![129.0, 127.0, 40.0, 29.0, 7.0])
            .with_hole(0.3)
    }

    #[test]
    fn percentages_follow_total() {
        let p = sources();
        assert_eq!(p.total(), 332.0);
        let pct = p.percentages();
        assert!((pct[0] - 129.0 / 332.0 * 100.0).abs() < 1e-9);
        assert!((pct.iter().sum::<f64>() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn slices_close_the_circle_counterclockwise_from_top() {
        let s = sources().slices();
        assert_eq!(s.len(), 5);
        assert_eq!(s[0].start_deg, -90.0);
        assert!(s.iter().all(|x| x.sweep_deg < 0.0));
        let end = s[4].start_deg + s[4].sweep_deg;
        assert!((end + 450.0).abs() < 1e-3);
        assert!(s.windows(2).all(|w| (w[0].start_deg + w[0].sweep_deg - w[1].start_deg).abs() < 1e-4));
    }

    #[test]
    fn zero_and_negative_values_have_no_slice() {
        let p = Pie::new(["a", "b", "c"], vec![1.0, 0.0, -2.0]);
        assert_eq!(p.slices().len(), 1);
        assert_eq!(p.percentages(), vec![100.0, 0.0, 0.0]);
        assert!(Pie::new(["a"], vec![0.0]).slices().is_empty());
    }

    #[test]
    fn slice_text_and_percent_format() {
        let p = sources();
        assert_eq!(p.slice_text(0), "Direct\n38.9%");
        assert_eq!(format_percent(7.0 / 332.0 * 100.0), "2.11%");
        assert_eq!(format_percent(100.0), "100%");
        assert_eq!(format_percent(40.0 / 332.0 * 100.0), "12%");
        assert_eq!(format_percent(10.0), "10%");
        assert_eq!(format_percent(5.5), "5.5%");
    }

    #[test]
    fn first_slice_sits_left_of_twelve() {
        let s = sources().slices();
        // Direct is 38.9% of the circle; its middle lands about 70 degrees left of the top
        let mid = s[0].mid_deg();
        assert!((mid - (-90.0 - 129.0 / 332.0 * 180.0)).abs() < 1e-3);
        assert!(mid.to_radians().cos() < 0.0);
    }

    #[test]
    fn thin_slices_hide_their_label() {
        let s = sources().slices();
        // 17px tall text at r = 160, hole 0.3
        assert!(label_fits(60.0, 17.0, &s[0], 160.0, 48.0));
        assert!(!label_fits(30.0, 17.0, &s[4], 160.0, 48.0));
        assert!(!label_fits(200.0, 17.0, &s[0], 160.0, 48.0));
    }
}
