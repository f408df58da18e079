// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings).

/// Default logical surface width in pixels.
pub const WIDTH: i32 = 700;
/// Default logical surface height in pixels.
pub const HEIGHT: i32 = 500;

/// Screen margins around the plot area, in logical pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(80, 80, 100, 80)
    }
}

/// Which vertical axis a series is plotted against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum YAxisRef {
    #[default]
    Primary,
    Secondary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insets_sums() {
        let i = Insets::new(1, 2, 3, 4);
        assert_eq!(i.hsum(), 3);
        assert_eq!(i.vsum(), 7);
        assert_eq!(Insets::default().hsum(), 160);
    }
}
