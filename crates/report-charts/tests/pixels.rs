// File: crates/report-charts/tests/pixels.rs
// Purpose: Unlabelled renders put the expected colours where the chart layout places them.

use chart_core::geometry::RectF;
use chart_core::scale::{BandScale, ScaleTransform, ValueScale};
use chart_core::{Chart, Color, RenderOptions, Theme, ViewState};
use report_charts::ReportChart;
use report_data::opportunities::{AXIS_MAX, AXIS_MIN};

const CYAN: [u8; 3] = [0x1F, 0xB8, 0xCD];
const PEACH: [u8; 3] = [0xFF, 0xC1, 0x85];
const RED: [u8; 3] = [0xDB, 0x45, 0x45];
const WHITE: [u8; 3] = [255, 255, 255];

struct Rendered {
    px: Vec<u8>,
    stride: usize,
    opts: RenderOptions,
    chart: Chart,
}

impl Rendered {
    fn plot(&self) -> RectF {
        RectF::inset(self.opts.width, self.opts.height, &self.opts.insets)
    }

    /// RGB of the device pixel under logical point (x, y).
    fn rgb(&self, x: f32, y: f32) -> [u8; 3] {
        let dx = (x * self.opts.scale) as usize;
        let dy = (y * self.opts.scale) as usize;
        let i = dy * self.stride + dx * 4;
        [self.px[i], self.px[i + 1], self.px[i + 2]]
    }
}

fn render(chart: ReportChart) -> Rendered {
    let mut opts = chart.options(Theme::report());
    opts.draw_labels = false;
    let built = chart.build().expect("build");
    let (px, _, _, stride) = built.chart.render_to_rgba8(&opts).expect("rgba");
    Rendered { px, stride, opts, chart: built.chart }
}

fn rgb_of(c: Color) -> [u8; 3] {
    [c.r(), c.g(), c.b()]
}

fn close(a: [u8; 3], b: [u8; 3], tol: u8) -> bool {
    a.iter().zip(b).all(|(x, y)| x.abs_diff(y) <= tol)
}

/// `c` at alpha 38/255 (opacity 0.15) over white paper.
fn tint(c: [u8; 3]) -> [u8; 3] {
    c.map(|v| (255.0 - (255.0 - f32::from(v)) * 38.0 / 255.0).round() as u8)
}

#[test]
fn heatmap_first_feature_is_the_bottom_row() {
    let img = render(ReportChart::AnalyticsComparison);
    let plot = img.plot();
    let xs = BandScale::new(plot.left, plot.right, 3);
    let ys = BandScale::new(plot.bottom, plot.top, 7);

    // Built-in Traffic: full on every platform
    assert_eq!(img.rgb(xs.center(0), ys.center(0)), CYAN);
    // Session Replays: none, none, full
    assert_eq!(img.rgb(xs.center(0), ys.center(3)), RED);
    assert_eq!(img.rgb(xs.center(1), ys.center(3)), RED);
    assert_eq!(img.rgb(xs.center(2), ys.center(3)), CYAN);
    // 2px gap between the two bottom rows
    let gap_y = plot.bottom - ys.band_width();
    assert!(close(img.rgb(xs.center(0), gap_y), WHITE, 8));
}

#[test]
fn quadrant_shading_fills_its_region() {
    let img = render(ReportChart::GrowthOpportunities);
    let plot = img.plot();
    let xs = ValueScale::new_linear(plot.left, plot.right, AXIS_MIN, AXIS_MAX);
    let ys = ValueScale::new_linear(plot.bottom, plot.top, AXIS_MIN, AXIS_MAX);

    // region centres as (effort, impact), clear of markers and grid lines
    let quick_wins = img.rgb(xs.to_px(1.5), ys.to_px(3.5));
    assert!(close(quick_wins, tint(CYAN), 3), "{quick_wins:?}");
    let major = img.rgb(xs.to_px(3.5), ys.to_px(3.5));
    assert!(close(major, tint(RED), 3), "{major:?}");
    // low impact, high effort holds no data and stays unshaded
    assert_eq!(img.rgb(xs.to_px(3.5), ys.to_px(1.5)), WHITE);
}

#[test]
fn donut_runs_counterclockwise_from_twelve() {
    let img = render(ReportChart::TrafficSources);
    let pie = img.chart.pie.as_ref().expect("pie");
    let ((cx, cy), r_out, r_in) = pie.geometry(img.plot());
    let rm = (r_out + r_in) * 0.5;
    let at = |deg: f32| {
        let a = deg.to_radians();
        img.rgb(cx + rm * a.cos(), cy + rm * a.sin())
    };
    let theme = Theme::report();

    // 30 degrees left of 12 o'clock: Direct, the first slice
    assert_eq!(at(-120.0), rgb_of(theme.trace_color(0)));
    // 30 degrees right of 12 o'clock: Wix Email, the fourth
    assert_eq!(at(-60.0), rgb_of(theme.trace_color(3)));
    assert_eq!(img.rgb(cx, cy), WHITE);
}

#[test]
fn grouped_bars_sit_side_by_side() {
    let img = render(ReportChart::DevicePerformance);
    let plot = img.plot();
    let view = ViewState::from_chart(&img.chart);
    let band = BandScale::new(plot.left, plot.right, 3);
    let ys = ValueScale::new_linear(plot.bottom, plot.top, view.y_min, view.y_max);
    let (lo2, hi2) = view.y2.expect("secondary axis");
    let y2s = ValueScale::new_linear(plot.bottom, plot.top, lo2, hi2);

    // Mobile and Desktop; Tablet's single click is too short to sample
    for (i, row) in report_data::device_performance().rows.iter().enumerate().take(2) {
        let (a, b) = band.slot(i, 0, 2, 0.8);
        assert_eq!(img.rgb((a + b) * 0.5, ys.to_px(f64::from(row.clicks) / 2.0)), CYAN, "{}", row.device);
        let (a, b) = band.slot(i, 1, 2, 0.8);
        assert_eq!(img.rgb((a + b) * 0.5, y2s.to_px(row.ctr / 2.0)), PEACH, "{}", row.device);
    }
}
