// File: crates/report-charts/src/charts/comparison.rs
// Summary: Feature × platform heatmap coloured by rating score with rating glyphs in the cells.

use chart_core::{Axis, Chart, Color, ColorScale, Heatmap, LegendPosition};
use report_data::FeatureComparison;

use super::{CYAN, GREEN, RED, YELLOW};

/// Score 0 (none) through 3 (full).
pub fn rating_scale() -> ColorScale {
    ColorScale::new(vec![(0.0, RED), (0.33, YELLOW), (0.66, GREEN), (1.0, CYAN)])
}

pub fn chart(data: &FeatureComparison) -> Chart {
    let mut chart = Chart::titled("Analytics Platform Feature Comparison");
    chart.x_axis = Axis::category("Platform").with_grid(false);
    chart.y_axis = Axis::category("Features").with_grid(false);
    chart.legend = LegendPosition::Hidden;
    chart.plot_background = Some(Color::WHITE);

    let features = data.features.iter().map(|f| f.to_string()).collect();
    chart.heatmap = Some(
        Heatmap::new(data.platform_labels(), features, data.scores(), rating_scale())
            .with_z_range(0.0, 3.0)
            .with_text(data.glyphs())
            .with_hover(data.hover())
            .with_text_font(24.0, Color::WHITE)
            .with_gaps(2.0, 2.0),
    );
    chart
}
