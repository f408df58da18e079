// File: crates/report-charts/src/lib.rs
// Summary: Report chart builders, the chart registry and render helpers shared by the binaries.

pub mod charts;
pub mod registry;
pub mod run;

pub use registry::{BuiltChart, ReportChart};
pub use run::{init_tracing, render_all, render_one, run_single, RunConfig, RunSummary};
