// File: crates/report-charts/src/charts/dashboard.rs
// Summary: Search console charts: clicks and CTR per device, and daily clicks with CTR.

use chart_core::{Axis, Chart, LegendPosition, Marker, Series, XData, YAxisRef};
use report_data::{DevicePerformance, SearchTrends};

use super::{CYAN, PEACH};

pub fn device_chart(data: &DevicePerformance) -> Chart {
    let mut chart = Chart::titled("Device Performance");
    chart.x_axis = Axis::category("").with_grid(false);
    chart.y_axis = Axis::linear("Clicks");
    chart.y2_axis = Some(Axis::linear("CTR (%)").with_grid(false));
    chart.legend = LegendPosition::TopCenter;

    let devices = || XData::categories(data.rows.iter().map(|r| r.device));
    chart.add_series(
        Series::bar("Clicks", devices(), data.rows.iter().map(|r| f64::from(r.clicks)).collect()).with_color(CYAN),
    );
    chart.add_series(
        Series::bar("CTR (%)", devices(), data.rows.iter().map(|r| r.ctr).collect())
            .with_color(PEACH)
            .on_axis(YAxisRef::Secondary),
    );
    chart
}

pub fn search_chart(data: &SearchTrends) -> Chart {
    let mut chart = Chart::titled("Search Performance Trends");
    chart.x_axis = Axis::category("Date");
    chart.y_axis = Axis::linear("Clicks");
    chart.y2_axis = Some(Axis::linear("CTR (%)").with_grid(false));
    chart.legend = LegendPosition::TopCenter;

    let days = || XData::categories(data.rows.iter().map(|r| r.label()));
    chart.add_series(
        Series::line("Clicks", days(), data.rows.iter().map(|r| f64::from(r.clicks)).collect())
            .with_color(CYAN)
            .with_line_width(3.0)
            .with_marker(Marker::circle(8.0))
            .with_hover(data.rows.iter().map(|r| format!("{}\nImpressions: {}", r.label(), r.impressions)).collect()),
    );
    chart.add_series(
        Series::line("CTR (%)", days(), data.rows.iter().map(|r| r.ctr).collect())
            .with_color(PEACH)
            .with_marker(Marker::square(7.0))
            .on_axis(YAxisRef::Secondary),
    );
    chart
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_bars_share_the_band() {
        let chart = device_chart(&report_data::device_performance());
        assert!(chart.uses_y2());
        assert_eq!(chart.x_categories(), vec!["Mobile", "Desktop", "Tablet"]);
        assert!(chart.x_axis.title.is_empty());
    }

    #[test]
    fn search_days_run_forward() {
        let chart = search_chart(&report_data::search_trends().unwrap());
        let cats = chart.x_categories();
        assert_eq!(cats.first().map(String::as_str), Some("Sep 1"));
        assert_eq!(cats.last().map(String::as_str), Some("Sep 7"));
    }
}
