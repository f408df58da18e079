// File: crates/report-data/src/lib.rs
// Summary: Literal report datasets, their derived columns, and a tabular view for CSV export.

pub mod dashboard;
pub mod error;
pub mod features;
pub mod impact;
pub mod opportunities;
pub mod sessions;
pub mod sources;
pub mod table;
pub mod traffic;
pub mod trends;

pub use dashboard::{device_performance, search_trends, DevicePerformance, DeviceRow, SearchDay, SearchTrends};
pub use error::{Error, Result};
pub use features::{feature_comparison, FeatureComparison, Platform, Rating, FEATURES};
pub use impact::{missing_features_impact, FeatureImpact, MissingFeatures, PLATFORM_ORDER};
pub use opportunities::{growth_opportunities, GrowthMatrix, Opportunity, Quadrant};
pub use sessions::{sessions_over_time, SessionCount, SessionsOverTime};
pub use sources::{traffic_sources, TrafficSources};
pub use table::{write_csv, write_csv_file, Table};
pub use traffic::{parse_us_date, traffic_analysis, DailyTraffic, TrafficAnalysis};
pub use trends::{traffic_trends, TrafficTrends, TrendDay};
