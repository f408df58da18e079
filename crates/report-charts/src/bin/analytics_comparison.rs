// File: crates/report-charts/src/bin/analytics_comparison.rs
// Summary: Platform feature comparison heatmap written to ./analytics_comparison.png.

fn main() -> anyhow::Result<()> {
    report_charts::run_single(report_charts::ReportChart::AnalyticsComparison)
}
