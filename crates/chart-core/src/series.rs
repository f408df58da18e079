// File: crates/chart-core/src/series.rs
// Summary: Cartesian series model (line, bar, marker sets) with per-point text and hover labels.

use chrono::NaiveDate;
use skia_safe as skia;

use crate::axis::day_number;
use crate::types::YAxisRef;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    /// Polyline through the points; markers drawn when a marker is set.
    Line,
    /// Bars from zero, grouped per category with the other bar series.
    Bar,
    /// Markers only.
    Markers,
}

/// X coordinates of a series.
#[derive(Clone, Debug)]
pub enum XData {
    Category(Vec<String>),
    Numeric(Vec<f64>),
    Date(Vec<NaiveDate>),
}

impl XData {
    pub fn categories<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        XData::Category(labels.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            XData::Category(v) => v.len(),
            XData::Numeric(v) => v.len(),
            XData::Date(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Data position of point `i`; categories resolve through `categories`.
    pub fn position(&self, i: usize, categories: &[String]) -> Option<f64> {
        match self {
            XData::Category(v) => {
                let label = v.get(i)?;
                categories.iter().position(|c| c == label).map(|p| p as f64)
            }
            XData::Numeric(v) => v.get(i).copied(),
            XData::Date(v) => v.get(i).copied().map(day_number),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerSymbol {
    Circle,
    Square,
}

#[derive(Clone, Copy, Debug)]
pub struct Marker {
    /// Diameter in logical pixels.
    pub size: f32,
    pub symbol: MarkerSymbol,
    /// Falls back to the series colour.
    pub color: Option<skia::Color>,
    pub outline: Option<(f32, skia::Color)>,
}

impl Marker {
    pub fn circle(size: f32) -> Self {
        Self { size, symbol: MarkerSymbol::Circle, color: None, outline: None }
    }
    pub fn square(size: f32) -> Self {
        Self { symbol: MarkerSymbol::Square, ..Self::circle(size) }
    }
    pub fn with_outline(mut self, width: f32, color: skia::Color) -> Self {
        self.outline = Some((width, color));
        self
    }
}

/// Where per-point text sits relative to its point (or bar top).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextPosition {
    Above,
    Right,
    Center,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub name: String,
    pub x: XData,
    pub y: Vec<f64>,
    /// Falls back to the theme colourway.
    pub color: Option<skia::Color>,
    pub line_width: f32,
    pub marker: Option<Marker>,
    pub text: Vec<String>,
    pub text_position: TextPosition,
    pub text_size: Option<f32>,
    pub text_color: Option<skia::Color>,
    /// Hover labels; kept with the data, not drawn on static output.
    pub hover: Vec<String>,
    pub y_axis: YAxisRef,
}

impl Series {
    pub fn new(series_type: SeriesType, name: impl Into<String>, x: XData, y: Vec<f64>) -> Self {
        Self {
            series_type,
            name: name.into(),
            x,
            y,
            color: None,
            line_width: 2.0,
            marker: None,
            text: Vec::new(),
            text_position: TextPosition::Above,
            text_size: None,
            text_color: None,
            hover: Vec::new(),
            y_axis: YAxisRef::Primary,
        }
    }

    pub fn line(name: impl Into<String>, x: XData, y: Vec<f64>) -> Self {
        Self::new(SeriesType::Line, name, x, y)
    }

    pub fn bar(name: impl Into<String>, x: XData, y: Vec<f64>) -> Self {
        Self::new(SeriesType::Bar, name, x, y)
    }

    pub fn markers(name: impl Into<String>, x: XData, y: Vec<f64>) -> Self {
        let mut s = Self::new(SeriesType::Markers, name, x, y);
        s.marker = Some(Marker::circle(8.0));
        s
    }

    pub fn with_color(mut self, c: skia::Color) -> Self {
        self.color = Some(c);
        self
    }

    pub fn with_line_width(mut self, w: f32) -> Self {
        self.line_width = w;
        self
    }

    pub fn with_marker(mut self, m: Marker) -> Self {
        self.marker = Some(m);
        self
    }

    pub fn with_text(mut self, text: Vec<String>, position: TextPosition) -> Self {
        self.text = text;
        self.text_position = position;
        self
    }

    pub fn with_text_font(mut self, size: f32, color: skia::Color) -> Self {
        self.text_size = Some(size);
        self.text_color = Some(color);
        self
    }

    pub fn with_hover(mut self, hover: Vec<String>) -> Self {
        self.hover = hover;
        self
    }

    pub fn on_axis(mut self, axis: YAxisRef) -> Self {
        self.y_axis = axis;
        self
    }

    /// Number of drawable points (shorter of x and y).
    pub fn len(&self) -> usize { self.x.len().min(self.y.len()) }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Resolved (x, y) data positions, skipping points whose category is unknown.
    pub fn points(&self, categories: &[String]) -> Vec<(usize, f64, f64)> {
        (0..self.len())
            .filter_map(|i| self.x.position(i, categories).map(|x| (i, x, self.y[i])))
            .collect()
    }
}
