// File: crates/report-charts/src/charts/impact.rs
// Summary: Grouped bars of missing-feature business impact, one trace per platform.

use chart_core::{Axis, Chart, Color, LegendPosition, Series, TextPosition, XData};
use report_data::{MissingFeatures, PLATFORM_ORDER};

use super::{CYAN, GREEN, RED};

fn platform_color(platform: &str) -> Color {
    match platform {
        "TWIPLA" => CYAN,
        "Google Analytics" => RED,
        _ => GREEN,
    }
}

pub fn chart(data: &MissingFeatures) -> Chart {
    let mut chart = Chart::titled("What You're Missing: Advanced Features");
    chart.x_axis = Axis::category("Platform Features")
        .with_categories(data.features())
        .with_tick_angle(45.0)
        .with_tick_font_size(10.0);
    chart.y_axis = Axis::new("Business Impact", 0.0, 50.0);
    chart.legend = LegendPosition::TopCenter;

    for platform in PLATFORM_ORDER {
        let rows = data.by_platform(platform);
        if rows.is_empty() {
            continue;
        }
        let x = XData::categories(rows.iter().map(|r| r.feature));
        let y = rows.iter().map(|r| f64::from(r.value)).collect();
        chart.add_series(
            Series::bar(platform, x, y)
                .with_color(platform_color(platform))
                .with_text(rows.iter().map(|r| r.label()).collect(), TextPosition::Above)
                .with_hover(rows.iter().map(|r| r.hover()).collect()),
        );
    }
    chart
}
