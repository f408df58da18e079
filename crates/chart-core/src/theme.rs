// File: crates/chart-core/src/theme.rs
// Summary: Report/Dark theming for chart rendering colors.

use skia_safe as skia;

use crate::color::rgb;

/// Categorical colourway shared by every report chart.
pub const REPORT_COLORWAY: [skia::Color; 9] = [
    rgb(0x1FB8CD),
    rgb(0xFFC185),
    rgb(0xECEBD5),
    rgb(0x5D878F),
    rgb(0xDB4545),
    rgb(0xD2BA4C),
    rgb(0x964325),
    rgb(0x944454),
    rgb(0x13343B),
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub zero_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_text: skia::Color,
    pub font_size: f32,
    pub title_size: f32,
    pub colorway: &'static [skia::Color],
}

impl Theme {
    pub fn report() -> Self {
        Self {
            name: "report",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(26, 0, 0, 0),
            zero_line: skia::Color::from_argb(64, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0x13, 0x34, 0x3B),
            tick: skia::Color::from_argb(255, 0x44, 0x44, 0x44),
            title: skia::Color::from_argb(255, 0x13, 0x34, 0x3B),
            legend_text: skia::Color::from_argb(255, 0x2A, 0x3F, 0x5F),
            font_size: 12.0,
            title_size: 17.0,
            colorway: &REPORT_COLORWAY,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 24, 24, 28),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            zero_line: skia::Color::from_argb(255, 80, 80, 90),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            legend_text: skia::Color::from_argb(255, 210, 210, 220),
            font_size: 12.0,
            title_size: 17.0,
            colorway: &REPORT_COLORWAY,
        }
    }

    /// Colourway entry for trace `i`, cycling.
    pub fn trace_color(&self, i: usize) -> skia::Color {
        self.colorway[i % self.colorway.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::report() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::report(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to report.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::report()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_with_fallback() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("nope").name, "report");
    }

    #[test]
    fn colorway_cycles() {
        let t = Theme::report();
        assert_eq!(t.trace_color(0), rgb(0x1FB8CD));
        assert_eq!(t.trace_color(9), t.trace_color(0));
    }
}
