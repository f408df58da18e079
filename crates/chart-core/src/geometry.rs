// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use skia_safe as skia;

use crate::types::Insets;

/// Axis-aligned rectangle in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    /// Plot area left after removing `insets` from a `width` x `height` surface.
    pub fn inset(width: i32, height: i32, insets: &Insets) -> Self {
        let right = (width - insets.right as i32).max(insets.left as i32 + 1);
        let bottom = (height - insets.bottom as i32).max(insets.top as i32 + 1);
        Self::from_ltrb(insets.left as f32, insets.top as f32, right as f32, bottom as f32)
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center(&self) -> (f32, f32) {
        ((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }
    /// Normalise so that left <= right and top <= bottom.
    pub fn sorted(&self) -> Self {
        Self {
            left: self.left.min(self.right),
            right: self.left.max(self.right),
            top: self.top.min(self.bottom),
            bottom: self.top.max(self.bottom),
        }
    }
    pub fn to_skia(self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_rect_never_inverts() {
        let r = RectF::inset(100, 50, &Insets::new(80, 80, 40, 40));
        assert!(r.width() >= 1.0);
        assert!(r.height() >= 1.0);
    }

    #[test]
    fn sorted_swaps_edges() {
        let r = RectF::from_ltrb(10.0, 20.0, 0.0, 5.0).sorted();
        assert_eq!(r, RectF::from_ltrb(0.0, 5.0, 10.0, 20.0));
    }
}
