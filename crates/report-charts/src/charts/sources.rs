// File: crates/report-charts/src/charts/sources.rs
// Summary: Traffic sources donut with label and percent inside each slice.

use chart_core::{Chart, LegendPosition, Pie};
use report_data::TrafficSources;

pub fn chart(data: &TrafficSources) -> Chart {
    let mut chart = Chart::titled("Traffic Sources Breakdown");
    chart.legend = LegendPosition::Right;
    let values = data.sessions.iter().map(|v| f64::from(*v)).collect();
    chart.pie = Some(Pie::new(data.labels.iter().copied(), values).with_hole(0.3).with_text_size(14.0));
    chart
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pie_percentages_match_shares() {
        let data = report_data::traffic_sources();
        let chart = chart(&data);
        let pie = chart.pie.as_ref().unwrap();
        for (p, s) in pie.percentages().iter().zip(data.shares()) {
            assert!((p - s).abs() < 1e-9);
        }
        assert!(pie.slice_text(0).starts_with("Direct\n"));
    }
}
