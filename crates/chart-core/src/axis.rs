// File: crates/chart-core/src/axis.rs
// Summary: Axis model (linear, category, date) with ranges, explicit ticks and tick labelling.

use chrono::{Datelike, NaiveDate};
use skia_safe as skia;

use crate::grid::{day_ticks, format_tick, nice_ticks};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    Linear,
    /// Categories sit at integer positions 0, 1, 2, ... in order of appearance.
    Category,
    /// Values are day numbers, see [`day_number`].
    Date,
}

/// One tick: data position and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub title: String,
    pub kind: AxisKind,
    /// Fixed data range; autoscaled when `None`.
    pub range: Option<(f64, f64)>,
    pub tick_values: Option<Vec<f64>>,
    pub tick_text: Option<Vec<String>>,
    /// Explicit category order; empty means order of first appearance in the data.
    pub categories: Vec<String>,
    pub show_grid: bool,
    pub grid_color: Option<skia::Color>,
    /// Clockwise rotation of tick labels in degrees.
    pub tick_angle: f32,
    pub tick_font_size: Option<f32>,
    /// Overrides the theme colour of title and tick labels.
    pub color: Option<skia::Color>,
    pub date_format: String,
    /// Target number of intervals for automatic ticks.
    pub tick_count: usize,
}

impl Axis {
    fn with_kind(title: impl Into<String>, kind: AxisKind) -> Self {
        Self {
            title: title.into(),
            kind,
            range: None,
            tick_values: None,
            tick_text: None,
            categories: Vec::new(),
            show_grid: true,
            grid_color: None,
            tick_angle: 0.0,
            tick_font_size: None,
            color: None,
            date_format: "%b %d".to_string(),
            tick_count: 6,
        }
    }

    /// Linear axis with a fixed range.
    pub fn new(title: impl Into<String>, min: f64, max: f64) -> Self {
        Self::with_kind(title, AxisKind::Linear).with_range(min, max)
    }

    pub fn linear(title: impl Into<String>) -> Self { Self::with_kind(title, AxisKind::Linear) }
    pub fn category(title: impl Into<String>) -> Self { Self::with_kind(title, AxisKind::Category) }
    pub fn date(title: impl Into<String>) -> Self { Self::with_kind(title, AxisKind::Date) }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }

    /// Explicit tick positions with their labels.
    pub fn with_ticks(mut self, values: Vec<f64>, text: Vec<String>) -> Self {
        self.tick_values = Some(values);
        self.tick_text = Some(text);
        self
    }

    pub fn with_categories<S: Into<String>>(mut self, cats: impl IntoIterator<Item = S>) -> Self {
        self.categories = cats.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    pub fn with_grid_color(mut self, c: skia::Color) -> Self {
        self.grid_color = Some(c);
        self
    }

    pub fn with_tick_angle(mut self, degrees: f32) -> Self {
        self.tick_angle = degrees;
        self
    }

    pub fn with_tick_font_size(mut self, size: f32) -> Self {
        self.tick_font_size = Some(size);
        self
    }

    pub fn with_color(mut self, c: skia::Color) -> Self {
        self.color = Some(c);
        self
    }

    /// Ticks for the resolved `range`. Explicit ticks win; otherwise categories,
    /// nice linear steps or whole days depending on the kind.
    pub fn ticks(&self, range: (f64, f64), categories: &[String]) -> Vec<Tick> {
        let (lo, hi) = (range.0.min(range.1), range.0.max(range.1));
        if let Some(values) = &self.tick_values {
            let text = self.tick_text.as_deref().unwrap_or(&[]);
            return values
                .iter()
                .enumerate()
                .filter(|(_, v)| **v >= lo - 1e-9 && **v <= hi + 1e-9)
                .map(|(i, v)| Tick {
                    value: *v,
                    label: text.get(i).cloned().unwrap_or_else(|| format_tick(*v, 1.0)),
                })
                .collect();
        }
        match self.kind {
            AxisKind::Category => categories
                .iter()
                .enumerate()
                .filter(|(i, _)| (*i as f64) >= lo && (*i as f64) <= hi)
                .map(|(i, c)| Tick { value: i as f64, label: c.clone() })
                .collect(),
            AxisKind::Linear => {
                let (values, step) = nice_ticks(lo, hi, self.tick_count);
                values.into_iter().map(|v| Tick { value: v, label: format_tick(v, step) }).collect()
            }
            AxisKind::Date => day_ticks(lo, hi, self.tick_count)
                .into_iter()
                .filter_map(|v| {
                    from_day_number(v).map(|d| Tick { value: v, label: d.format(&self.date_format).to_string() })
                })
                .collect(),
        }
    }
}

/// Position of a calendar date on a date axis.
pub fn day_number(d: NaiveDate) -> f64 {
    d.num_days_from_ce() as f64
}

pub fn from_day_number(v: f64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(v.round() as i32)
}
