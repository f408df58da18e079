// File: crates/chart-core/src/error.rs
// Summary: Render error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
    #[error("failed to read back surface pixels")]
    ReadPixels,
    #[error("invalid colour literal '{0}'")]
    InvalidColor(String),
    #[error("heatmap z has {rows}x{cols} cells but axes carry {y_len} y and {x_len} x categories")]
    HeatmapShape { rows: usize, cols: usize, y_len: usize, x_len: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = RenderError> = std::result::Result<T, E>;
