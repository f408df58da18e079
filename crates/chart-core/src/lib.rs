// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod annotation;
pub mod axis;
pub mod chart;
pub mod color;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod heatmap;
pub mod legend;
pub mod pie;
mod render;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use annotation::{Annotation, Layer, Shape};
pub use axis::{day_number, Axis, AxisKind, Tick};
pub use chart::{Chart, RenderOptions};
pub use color::{parse_hex, rgb, with_opacity, ColorScale};
pub use error::RenderError;
pub use heatmap::Heatmap;
pub use legend::{LegendEntry, LegendPosition, Swatch};
pub use pie::Pie;
pub use render::legend_entries;
pub use series::{Marker, MarkerSymbol, Series, SeriesType, TextPosition, XData};
pub use text::{TextShaper, TextSpec};
pub use theme::Theme;
pub use types::{Insets, YAxisRef};
pub use view::ViewState;

/// Re-exported so callers can name colours without depending on skia-safe directly.
pub use skia_safe::Color;
