// File: crates/report-charts/src/bin/device_performance.rs
// Summary: Clicks and CTR per device written to ./device_performance.png.

fn main() -> anyhow::Result<()> {
    report_charts::run_single(report_charts::ReportChart::DevicePerformance)
}
