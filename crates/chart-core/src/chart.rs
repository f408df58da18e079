// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG/RGBA rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;
use tracing::debug;

use crate::annotation::{Annotation, Shape};
use crate::axis::Axis;
use crate::error::{RenderError, Result};
use crate::heatmap::Heatmap;
use crate::legend::LegendPosition;
use crate::pie::Pie;
use crate::render::draw_chart;
use crate::series::{Series, XData};
use crate::theme::Theme;
use crate::types::{Insets, YAxisRef, HEIGHT, WIDTH};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Logical width; output pixels are `width * scale`.
    pub width: i32,
    pub height: i32,
    pub scale: f32,
    pub insets: Insets,
    pub theme: Theme,
    /// Off disables all text, for pixel comparisons independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            scale: 1.0,
            insets: Insets::default(),
            theme: Theme::report(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn sized(width: i32, height: i32, scale: f32) -> Self {
        Self { width, height, scale, ..Self::default() }
    }

    /// Output surface size in device pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        let s = self.scale.max(0.01);
        ((self.width as f32 * s).round() as i32, (self.height as f32 * s).round() as i32)
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Right-hand axis overlaying the primary one.
    pub y2_axis: Option<Axis>,
    pub heatmap: Option<Heatmap>,
    /// A pie replaces the cartesian frame entirely.
    pub pie: Option<Pie>,
    pub shapes: Vec<Shape>,
    pub annotations: Vec<Annotation>,
    pub legend: LegendPosition,
    pub plot_background: Option<skia::Color>,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::linear(""),
            y_axis: Axis::linear(""),
            y2_axis: None,
            heatmap: None,
            pie: None,
            shapes: Vec::new(),
            annotations: Vec::new(),
            legend: LegendPosition::default(),
            plot_background: None,
        }
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::new() }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Whether any series is bound to the secondary y axis.
    pub fn uses_y2(&self) -> bool {
        self.y2_axis.is_some() && self.series.iter().any(|s| s.y_axis == YAxisRef::Secondary)
    }

    /// X categories: explicit axis order, else first appearance across series then heatmap.
    pub fn x_categories(&self) -> Vec<String> {
        if !self.x_axis.categories.is_empty() {
            return self.x_axis.categories.clone();
        }
        let mut out: Vec<String> = Vec::new();
        let mut push = |c: &String| {
            if !out.contains(c) { out.push(c.clone()); }
        };
        for s in &self.series {
            if let XData::Category(labels) = &s.x {
                labels.iter().for_each(&mut push);
            }
        }
        if let Some(h) = &self.heatmap {
            h.x.iter().for_each(&mut push);
        }
        out
    }

    /// Y categories: explicit axis order, else the heatmap rows.
    pub fn y_categories(&self) -> Vec<String> {
        if !self.y_axis.categories.is_empty() {
            return self.y_axis.categories.clone();
        }
        self.heatmap.as_ref().map(|h| h.y.clone()).unwrap_or_default()
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, &bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
        Ok(())
    }

    /// Render to encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to unpremultiplied RGBA8 pixels: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = opts.pixel_size();
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        if let Some(h) = &self.heatmap {
            h.validate()?;
        }
        let (w, h) = opts.pixel_size();
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(RenderError::Surface { width: w, height: h })?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);
        canvas.save();
        canvas.scale((opts.scale, opts.scale));
        draw_chart(self, canvas, opts);
        canvas.restore();
        Ok(surface)
    }
}
