// File: crates/report-charts/src/bin/traffic_analysis.rs
// Summary: Website traffic line chart over parsed dates written to ./traffic_analysis.png.

fn main() -> anyhow::Result<()> {
    report_charts::run_single(report_charts::ReportChart::TrafficAnalysis)
}
