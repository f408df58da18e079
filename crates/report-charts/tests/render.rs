// File: crates/report-charts/tests/render.rs
// Purpose: Every registry chart renders headlessly at its report size, deterministically.

use chart_core::Theme;
use report_charts::ReportChart;

fn unlabelled(chart: ReportChart) -> chart_core::RenderOptions {
    let mut opts = chart.options(Theme::report());
    opts.draw_labels = false;
    opts
}

#[test]
fn every_chart_renders_at_logical_size_times_scale() {
    for chart in ReportChart::ALL {
        let built = chart.build().expect("build");
        let opts = unlabelled(chart);
        let bytes = built.chart.render_to_png_bytes(&opts).expect("render");
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "{}", chart.name());
        let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
        let (w, h) = opts.pixel_size();
        assert_eq!((img.width() as i32, img.height() as i32), (w, h), "{}", chart.name());
    }
}

#[test]
fn rgba_buffer_covers_every_pixel() {
    let chart = ReportChart::TrafficSources;
    let built = chart.build().expect("build");
    let (px, w, h, stride) = built.chart.render_to_rgba8(&unlabelled(chart)).expect("rgba");
    assert_eq!((w, h), (700, 500));
    assert_eq!(stride, w as usize * 4);
    assert_eq!(px.len(), (w * h * 4) as usize);
    // white paper in the corner
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn rendering_twice_gives_identical_bytes() {
    for chart in [ReportChart::TrafficTrends, ReportChart::GrowthOpportunities, ReportChart::AnalyticsComparison] {
        let opts = unlabelled(chart);
        let a = chart.build().unwrap().chart.render_to_png_bytes(&opts).unwrap();
        let b = chart.build().unwrap().chart.render_to_png_bytes(&opts).unwrap();
        assert_eq!(a, b, "{}", chart.name());
    }
}

#[test]
fn dark_theme_changes_the_background() {
    let chart = ReportChart::SessionsOverTime;
    let mut opts = chart.options(Theme::dark());
    opts.draw_labels = false;
    let (px, ..) = chart.build().unwrap().chart.render_to_rgba8(&opts).unwrap();
    assert_eq!(&px[0..3], &[18, 18, 20]);
}
