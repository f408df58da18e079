// File: crates/report-charts/src/bin/search_trends.rs
// Summary: Daily search clicks and CTR written to ./search_trends.png.

fn main() -> anyhow::Result<()> {
    report_charts::run_single(report_charts::ReportChart::SearchTrends)
}
