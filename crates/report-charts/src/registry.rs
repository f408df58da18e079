// File: crates/report-charts/src/registry.rs
// Summary: Registry of every report chart: output name, render size and dataset-to-chart build.

use anyhow::{Context, Result};
use chart_core::{Chart, Insets, RenderOptions, Theme};
use clap::ValueEnum;
use report_data::Table;

use crate::charts;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum ReportChart {
    #[value(name = "sessions_over_time")]
    SessionsOverTime,
    #[value(name = "traffic_analysis")]
    TrafficAnalysis,
    #[value(name = "traffic_trends_chart")]
    TrafficTrends,
    #[value(name = "analytics_comparison")]
    AnalyticsComparison,
    #[value(name = "missing_features_impact")]
    MissingFeaturesImpact,
    #[value(name = "traffic_sources_chart")]
    TrafficSources,
    #[value(name = "growth_opportunities_matrix")]
    GrowthOpportunities,
    #[value(name = "device_performance")]
    DevicePerformance,
    #[value(name = "search_trends")]
    SearchTrends,
}

/// A built chart together with the table it was built from.
pub struct BuiltChart {
    pub chart: Chart,
    pub table: Box<dyn Table>,
}

impl BuiltChart {
    fn new(chart: Chart, table: impl Table + 'static) -> Self {
        Self { chart, table: Box::new(table) }
    }
}

impl ReportChart {
    pub const ALL: [ReportChart; 9] = [
        ReportChart::SessionsOverTime,
        ReportChart::TrafficAnalysis,
        ReportChart::TrafficTrends,
        ReportChart::AnalyticsComparison,
        ReportChart::MissingFeaturesImpact,
        ReportChart::TrafficSources,
        ReportChart::GrowthOpportunities,
        ReportChart::DevicePerformance,
        ReportChart::SearchTrends,
    ];

    /// File stem shared by the PNG, the CSV and the standalone binary.
    pub fn name(self) -> &'static str {
        match self {
            ReportChart::SessionsOverTime => "sessions_over_time",
            ReportChart::TrafficAnalysis => "traffic_analysis",
            ReportChart::TrafficTrends => "traffic_trends_chart",
            ReportChart::AnalyticsComparison => "analytics_comparison",
            ReportChart::MissingFeaturesImpact => "missing_features_impact",
            ReportChart::TrafficSources => "traffic_sources_chart",
            ReportChart::GrowthOpportunities => "growth_opportunities_matrix",
            ReportChart::DevicePerformance => "device_performance",
            ReportChart::SearchTrends => "search_trends",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.png", self.name())
    }

    pub fn csv_name(self) -> String {
        format!("{}.csv", self.name())
    }

    /// Logical size, scale and margins; everything else comes from `theme`.
    pub fn options(self, theme: Theme) -> RenderOptions {
        let mut opts = match self {
            ReportChart::TrafficTrends => RenderOptions::sized(1200, 600, 2.0),
            ReportChart::AnalyticsComparison => RenderOptions::sized(800, 600, 2.0),
            _ => RenderOptions::default(),
        };
        opts.theme = theme;
        opts.insets = match self {
            ReportChart::AnalyticsComparison => Insets::new(150, 60, 90, 70),
            ReportChart::MissingFeaturesImpact => Insets::new(80, 40, 110, 130),
            ReportChart::TrafficTrends | ReportChart::DevicePerformance | ReportChart::SearchTrends => {
                Insets::new(80, 110, 110, 80)
            }
            ReportChart::TrafficSources => Insets::new(40, 200, 90, 40),
            ReportChart::GrowthOpportunities => Insets::new(80, 40, 120, 70),
            ReportChart::SessionsOverTime | ReportChart::TrafficAnalysis => Insets::default(),
        };
        opts
    }

    pub fn build(self) -> Result<BuiltChart> {
        let built = match self {
            ReportChart::SessionsOverTime => {
                let data = report_data::sessions_over_time();
                BuiltChart::new(charts::sessions::chart(&data), data)
            }
            ReportChart::TrafficAnalysis => {
                let data = report_data::traffic_analysis().context("traffic data")?;
                BuiltChart::new(charts::traffic::chart(&data), data)
            }
            ReportChart::TrafficTrends => {
                let data = report_data::traffic_trends().context("synthetic trends")?;
                BuiltChart::new(charts::trends::chart(&data), data)
            }
            ReportChart::AnalyticsComparison => {
                let data = report_data::feature_comparison().context("feature ratings")?;
                BuiltChart::new(charts::comparison::chart(&data), data)
            }
            ReportChart::MissingFeaturesImpact => {
                let data = report_data::missing_features_impact();
                BuiltChart::new(charts::impact::chart(&data), data)
            }
            ReportChart::TrafficSources => {
                let data = report_data::traffic_sources();
                BuiltChart::new(charts::sources::chart(&data), data)
            }
            ReportChart::GrowthOpportunities => {
                let data = report_data::growth_opportunities().context("growth matrix")?;
                BuiltChart::new(charts::growth::chart(&data), data)
            }
            ReportChart::DevicePerformance => {
                let data = report_data::device_performance();
                BuiltChart::new(charts::dashboard::device_chart(&data), data)
            }
            ReportChart::SearchTrends => {
                let data = report_data::search_trends().context("search trends")?;
                BuiltChart::new(charts::dashboard::search_chart(&data), data)
            }
        };
        Ok(built)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique_and_match_the_cli() {
        let mut names: Vec<&str> = ReportChart::ALL.iter().map(|c| c.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ReportChart::ALL.len());
        for c in ReportChart::ALL {
            assert_eq!(ReportChart::from_str(c.name(), false).unwrap(), c);
        }
        assert_eq!(ReportChart::value_variants().len(), ReportChart::ALL.len());
    }

    #[test]
    fn sizes_follow_the_report_layout() {
        let t = Theme::report();
        assert_eq!(ReportChart::TrafficTrends.options(t).pixel_size(), (2400, 1200));
        assert_eq!(ReportChart::AnalyticsComparison.options(t).pixel_size(), (1600, 1200));
        assert_eq!(ReportChart::SessionsOverTime.options(t).pixel_size(), (700, 500));
        assert_eq!(ReportChart::GrowthOpportunities.options(t).pixel_size(), (700, 500));
    }

    #[test]
    fn every_chart_builds_with_a_table() {
        for c in ReportChart::ALL {
            let built = c.build().unwrap();
            assert!(!built.table.headers().is_empty(), "{}", c.name());
            assert!(!built.table.rows().is_empty(), "{}", c.name());
        }
    }
}
