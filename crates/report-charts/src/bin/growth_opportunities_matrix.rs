// File: crates/report-charts/src/bin/growth_opportunities_matrix.rs
// Summary: Impact/effort growth matrix written to ./growth_opportunities_matrix.png.

fn main() -> anyhow::Result<()> {
    report_charts::run_single(report_charts::ReportChart::GrowthOpportunities)
}
