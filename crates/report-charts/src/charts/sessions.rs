// File: crates/report-charts/src/charts/sessions.rs
// Summary: "Sessions Over Time" line chart over categorical day labels.

use chart_core::{Axis, Chart, Color, LegendPosition, Marker, Series, XData};
use report_data::SessionsOverTime;

use super::CYAN;

pub fn chart(data: &SessionsOverTime) -> Chart {
    let grid = Color::from_argb(26, 0, 0, 0);
    let mut chart = Chart::titled("Sessions Over Time");
    chart.x_axis = Axis::category("Date").with_grid_color(grid);
    chart.y_axis = Axis::linear("Sessions").with_grid_color(grid);
    chart.legend = LegendPosition::Hidden;

    let days = XData::categories(data.rows.iter().map(|r| r.day));
    let sessions = data.rows.iter().map(|r| f64::from(r.sessions)).collect();
    chart.add_series(
        Series::line("Sessions", days, sessions)
            .with_color(CYAN)
            .with_line_width(3.0)
            .with_marker(Marker::circle(8.0))
            .with_hover(data.rows.iter().map(|r| r.hover()).collect()),
    );
    chart
}
