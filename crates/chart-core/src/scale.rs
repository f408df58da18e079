// File: crates/chart-core/src/scale.rs
// Summary: Value (linear) and band (category) scales mapping data positions to pixels.

/// Data-space coordinate (value, day number or category index).
pub type Value = f64;

/// General scale transform operations for one axis.
pub trait ScaleTransform {
    fn to_px(&self, v: Value) -> f32;
    fn from_px(&self, px: f32) -> Value;
}

/// Linear scale mapping `[vmin, vmax]` onto `[start_px, end_px]`.
/// `end_px < start_px` is allowed (vertical axes grow upwards).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(start_px: f32, end_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { start_px, end_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
}

impl ScaleTransform for ValueScale {
    #[inline]
    fn to_px(&self, v: Value) -> f32 {
        let span = self.vmax - self.vmin;
        self.start_px + ((v - self.vmin) / span) as f32 * (self.end_px - self.start_px)
    }
    #[inline]
    fn from_px(&self, px: f32) -> Value {
        let len = self.end_px - self.start_px;
        if len.abs() < 1e-6 { return self.vmin; }
        self.vmin + ((px - self.start_px) / len) as f64 * (self.vmax - self.vmin)
    }
}

/// Band scale for `n` categories; category `i` is centred in the i-th band.
/// Data positions are category indices, so fractional positions (e.g. -0.5) also map.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub start_px: f32,
    pub end_px: f32,
    pub n: usize,
}

impl BandScale {
    pub fn new(start_px: f32, end_px: f32, n: usize) -> Self {
        Self { start_px, end_px, n: n.max(1) }
    }
    /// Signed pixel step between neighbouring categories.
    #[inline]
    fn step(&self) -> f32 { (self.end_px - self.start_px) / self.n as f32 }
    pub fn band_width(&self) -> f32 { self.step().abs() }
    pub fn center(&self, i: usize) -> f32 { self.to_px(i as f64) }

    /// Pixel span `[a, b)` of slot `k` out of `slots` when a band's `fill` fraction
    /// is split evenly (grouped bars).
    pub fn slot(&self, i: usize, k: usize, slots: usize, fill: f32) -> (f32, f32) {
        let slots = slots.max(1);
        let group = self.band_width() * fill;
        let w = group / slots as f32;
        let left = self.center(i) - group * 0.5 + w * k as f32;
        (left, left + w)
    }
}

impl ScaleTransform for BandScale {
    #[inline]
    fn to_px(&self, v: Value) -> f32 {
        self.start_px + (v as f32 + 0.5) * self.step()
    }
    #[inline]
    fn from_px(&self, px: f32) -> Value {
        let step = self.step();
        if step.abs() < 1e-6 { return 0.0; }
        ((px - self.start_px) / step - 0.5) as f64
    }
}

/// Resolved scale for a rendered axis.
#[derive(Clone, Copy, Debug)]
pub enum AxisScale {
    Value(ValueScale),
    Band(BandScale),
}

impl AxisScale {
    pub fn band(&self) -> Option<&BandScale> {
        match self {
            AxisScale::Band(b) => Some(b),
            AxisScale::Value(_) => None,
        }
    }
}

impl ScaleTransform for AxisScale {
    fn to_px(&self, v: Value) -> f32 {
        match self {
            AxisScale::Value(s) => s.to_px(v),
            AxisScale::Band(s) => s.to_px(v),
        }
    }
    fn from_px(&self, px: f32) -> Value {
        match self {
            AxisScale::Value(s) => s.from_px(px),
            AxisScale::Band(s) => s.from_px(px),
        }
    }
}
