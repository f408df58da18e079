// File: crates/chart-core/src/color.rs
// Summary: Hex colour parsing, opacity helpers and piecewise-linear colour scales.

use skia_safe as skia;

use crate::error::RenderError;

/// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
pub fn parse_hex(s: &str) -> Result<skia::Color, RenderError> {
    let hex = s.trim().trim_start_matches('#');
    let byte = |i: usize| -> Result<u8, RenderError> {
        hex.get(i..i + 2)
            .and_then(|h| u8::from_str_radix(h, 16).ok())
            .ok_or_else(|| RenderError::InvalidColor(s.to_string()))
    };
    match hex.len() {
        6 => Ok(skia::Color::from_argb(255, byte(0)?, byte(2)?, byte(4)?)),
        8 => Ok(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => Err(RenderError::InvalidColor(s.to_string())),
    }
}

/// Compile-time friendly opaque colour from a 0xRRGGBB literal.
pub const fn rgb(hex: u32) -> skia::Color {
    skia::Color::new(0xFF00_0000 | (hex & 0x00FF_FFFF))
}

/// Same colour with alpha multiplied by `opacity` in [0, 1].
pub fn with_opacity(c: skia::Color, opacity: f32) -> skia::Color {
    let a = (c.a() as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
    c.with_a(a)
}

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
}

/// Linear blend between two colours, `t` in [0, 1].
pub fn mix(a: skia::Color, b: skia::Color, t: f32) -> skia::Color {
    let t = t.clamp(0.0, 1.0);
    skia::Color::from_argb(
        lerp_u8(a.a(), b.a(), t),
        lerp_u8(a.r(), b.r(), t),
        lerp_u8(a.g(), b.g(), t),
        lerp_u8(a.b(), b.b(), t),
    )
}

/// Piecewise-linear colour scale over normalised positions in [0, 1].
#[derive(Clone, Debug)]
pub struct ColorScale {
    stops: Vec<(f32, skia::Color)>,
}

impl ColorScale {
    /// Stops are sorted by position; an empty list yields a black scale.
    pub fn new(mut stops: Vec<(f32, skia::Color)>) -> Self {
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        if stops.is_empty() {
            stops.push((0.0, skia::Color::BLACK));
        }
        Self { stops }
    }

    pub fn stops(&self) -> &[(f32, skia::Color)] { &self.stops }

    /// Colour at normalised position `t` (clamped to the outer stops).
    pub fn at(&self, t: f32) -> skia::Color {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];
        if t <= first.0 { return first.1; }
        if t >= last.0 { return last.1; }
        for w in self.stops.windows(2) {
            let (p0, c0) = w[0];
            let (p1, c1) = w[1];
            if t >= p0 && t <= p1 {
                let span = (p1 - p0).max(1e-6);
                return mix(c0, c1, (t - p0) / span);
            }
        }
        last.1
    }

    /// Colour for `value` normalised over `[min, max]`.
    pub fn map(&self, value: f64, min: f64, max: f64) -> skia::Color {
        let span = max - min;
        let t = if span.abs() < 1e-12 { 0.0 } else { ((value - min) / span) as f32 };
        self.at(t)
    }
}
