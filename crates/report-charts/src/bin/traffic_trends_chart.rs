// File: crates/report-charts/src/bin/traffic_trends_chart.rs
// Summary: Dual-axis synthetic traffic trends chart written to ./traffic_trends_chart.png.

fn main() -> anyhow::Result<()> {
    report_charts::run_single(report_charts::ReportChart::TrafficTrends)
}
