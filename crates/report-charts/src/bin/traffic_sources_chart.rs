// File: crates/report-charts/src/bin/traffic_sources_chart.rs
// Summary: Traffic sources donut chart written to ./traffic_sources_chart.png.

fn main() -> anyhow::Result<()> {
    report_charts::run_single(report_charts::ReportChart::TrafficSources)
}
