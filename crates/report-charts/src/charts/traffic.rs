// File: crates/report-charts/src/charts/traffic.rs
// Summary: "Website Traffic Trends" sessions line over parsed, sorted dates.

use chart_core::{Axis, Chart, LegendPosition, Marker, Series, XData};
use report_data::TrafficAnalysis;

use super::CYAN;

pub fn chart(data: &TrafficAnalysis) -> Chart {
    let mut chart = Chart::titled("Website Traffic Trends");
    chart.x_axis = Axis::date("Date");
    chart.y_axis = Axis::linear("Sessions");
    // a single trace keeps its legend hidden
    chart.legend = LegendPosition::Hidden;

    let dates = XData::Date(data.rows.iter().map(|r| r.date).collect());
    let sessions = data.rows.iter().map(|r| f64::from(r.sessions)).collect();
    chart.add_series(
        Series::line("Sessions", dates, sessions)
            .with_color(CYAN)
            .with_line_width(3.0)
            .with_marker(Marker::circle(8.0))
            .with_hover(data.rows.iter().map(|r| r.hover()).collect()),
    );
    chart
}
