// File: crates/report-charts/src/bin/missing_features_impact.rs
// Summary: Grouped bar chart of missing-feature impact written to ./missing_features_impact.png.

fn main() -> anyhow::Result<()> {
    report_charts::run_single(report_charts::ReportChart::MissingFeaturesImpact)
}
