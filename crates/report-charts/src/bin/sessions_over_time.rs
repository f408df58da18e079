// File: crates/report-charts/src/bin/sessions_over_time.rs
// Summary: Sessions over time line chart written to ./sessions_over_time.png.

fn main() -> anyhow::Result<()> {
    report_charts::run_single(report_charts::ReportChart::SessionsOverTime)
}
