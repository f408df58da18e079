// File: crates/report-charts/src/main.rs
// Summary: Render every report chart (or a subset) into one directory, optionally with CSV tables.

use std::path::PathBuf;
use std::process::ExitCode;

use chart_core::theme;
use clap::Parser;
use report_charts::{init_tracing, render_all, ReportChart, RunConfig};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "report-charts", about = "Render the KAA report charts to PNG")]
struct Args {
    /// Directory the PNG (and CSV) files are written to.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Render only these charts; repeat for several.
    #[arg(long, value_enum)]
    only: Vec<ReportChart>,

    /// Theme name: report or dark.
    #[arg(long, default_value = "report")]
    theme: String,

    /// Also write each chart's table as CSV.
    #[arg(long)]
    export_csv: bool,

    /// Print the chart names and exit.
    #[arg(long)]
    list: bool,

    /// Default log filter when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    if args.list {
        for chart in ReportChart::ALL {
            println!("{:<28} {}", chart.name(), chart.file_name());
        }
        return ExitCode::SUCCESS;
    }

    let charts: Vec<ReportChart> = if args.only.is_empty() { ReportChart::ALL.to_vec() } else { args.only.clone() };
    let theme = theme::find(&args.theme);
    if !theme.name.eq_ignore_ascii_case(&args.theme) {
        warn!(requested = %args.theme, using = theme.name, "unknown theme");
    }
    let cfg = RunConfig { out_dir: args.out_dir.clone(), theme, export_csv: args.export_csv };
    info!(count = charts.len(), out_dir = %cfg.out_dir.display(), theme = cfg.theme.name, "rendering charts");

    let summary = render_all(&charts, &cfg);
    if summary.is_success() {
        info!(files = summary.written.len(), "done");
        ExitCode::SUCCESS
    } else {
        for (chart, e) in &summary.failed {
            eprintln!("{}: {e:#}", chart.name());
        }
        warn!(failed = summary.failed.len(), "some charts failed");
        ExitCode::FAILURE
    }
}
