// File: crates/chart-core/src/view.rs
// Resolved view ranges: fixed axis ranges or autorange over the data bound to each axis.

use crate::axis::{Axis, AxisKind};
use crate::series::SeriesType;
use crate::types::YAxisRef;
use crate::Chart;

/// Fraction of the span added on each side of autoranged value axes.
const PAD: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub y2: Option<(f64, f64)>,
}

impl ViewState {
    pub fn from_chart(chart: &Chart) -> Self {
        let x_cats = chart.x_categories();
        let (x_min, x_max) = x_range(chart, &x_cats);
        let (y_min, y_max) = y_range(chart, &chart.y_axis, YAxisRef::Primary, &x_cats);
        let y2 = chart
            .y2_axis
            .as_ref()
            .filter(|_| chart.uses_y2())
            .map(|a| y_range(chart, a, YAxisRef::Secondary, &x_cats));
        Self { x_min, x_max, y_min, y_max, y2 }
    }

    pub fn x_range(&self) -> (f64, f64) { (self.x_min, self.x_max) }
    pub fn y_range(&self) -> (f64, f64) { (self.y_min, self.y_max) }
}

fn category_range(n: usize) -> (f64, f64) {
    (-0.5, n.max(1) as f64 - 0.5)
}

fn x_range(chart: &Chart, cats: &[String]) -> (f64, f64) {
    if let Some(r) = chart.x_axis.range { return r; }
    if chart.x_axis.kind == AxisKind::Category {
        return category_range(cats.len());
    }
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for s in &chart.series {
        for (_, x, _) in s.points(cats) {
            lo = lo.min(x);
            hi = hi.max(x);
        }
    }
    if !lo.is_finite() { return (0.0, 1.0); }
    if (hi - lo).abs() < 1e-9 { return (lo - 0.5, hi + 0.5); }
    // markers sit a little inside the frame
    let m = (hi - lo) * 0.02;
    (lo - m, hi + m)
}

fn y_range(chart: &Chart, axis: &Axis, which: YAxisRef, cats: &[String]) -> (f64, f64) {
    if let Some(r) = axis.range { return r; }
    if axis.kind == AxisKind::Category {
        return category_range(chart.y_categories().len());
    }
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut has_bars = false;
    // without a secondary axis every series lands on the primary one
    let shared = which == YAxisRef::Primary && !chart.uses_y2();
    for s in chart.series.iter().filter(|s| s.y_axis == which || shared) {
        has_bars |= s.series_type == SeriesType::Bar;
        for (_, _, y) in s.points(cats) {
            if y.is_finite() {
                lo = lo.min(y);
                hi = hi.max(y);
            }
        }
    }
    if !lo.is_finite() { return (0.0, 1.0); }
    if has_bars {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }
    if (hi - lo).abs() < 1e-9 { hi = lo + 1.0; }
    let m = (hi - lo) * PAD;
    // bars rest on zero; only pad away from it
    let lo = if has_bars && lo == 0.0 { 0.0 } else { lo - m };
    let hi = if has_bars && hi == 0.0 { 0.0 } else { hi + m };
    (lo, hi)
}
