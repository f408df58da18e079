// File: crates/report-charts/src/run.rs
// Summary: Rendering registry charts to disk, logging setup, and the shared entry point of the per-chart binaries.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::Theme;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use crate::registry::ReportChart;

/// Install the fmt subscriber; `RUST_LOG` wins over `default_level`.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).try_init();
}

#[derive(Clone, Debug)]
pub struct RunConfig {
    pub out_dir: PathBuf,
    pub theme: Theme,
    pub export_csv: bool,
}

impl RunConfig {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: out_dir.into(), theme: Theme::report(), export_csv: false }
    }
}

/// Render one chart (and optionally its CSV); returns the written paths.
pub fn render_one(chart: ReportChart, cfg: &RunConfig) -> Result<Vec<PathBuf>> {
    let built = chart.build().with_context(|| format!("building {}", chart.name()))?;
    let opts = chart.options(cfg.theme);
    let png = cfg.out_dir.join(chart.file_name());
    built
        .chart
        .render_to_png(&opts, &png)
        .with_context(|| format!("rendering {} to {}", chart.name(), png.display()))?;
    let (w, h) = opts.pixel_size();
    info!(chart = chart.name(), path = %png.display(), width = w, height = h, "wrote chart");

    let mut written = vec![png];
    if cfg.export_csv {
        let csv = cfg.out_dir.join(chart.csv_name());
        report_data::write_csv_file(&*built.table, &csv)
            .with_context(|| format!("exporting {} to {}", chart.name(), csv.display()))?;
        info!(chart = chart.name(), path = %csv.display(), "wrote table");
        written.push(csv);
    }
    Ok(written)
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(ReportChart, anyhow::Error)>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Render every chart in `charts`, carrying on past failures.
pub fn render_all(charts: &[ReportChart], cfg: &RunConfig) -> RunSummary {
    let mut summary = RunSummary::default();
    for &chart in charts {
        match render_one(chart, cfg) {
            Ok(paths) => summary.written.extend(paths),
            Err(e) => {
                error!(chart = chart.name(), "{e:#}");
                summary.failed.push((chart, e));
            }
        }
    }
    summary
}

/// Entry point of the no-argument per-chart binaries: PNG into the working directory.
pub fn run_single(chart: ReportChart) -> Result<()> {
    init_tracing("info");
    render_one(chart, &RunConfig::new(Path::new(".")))?;
    Ok(())
}
