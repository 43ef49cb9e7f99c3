//! CLI tool for heatview - lays out a heatmap document and outputs the plan
//!
//! Usage:
//!   heatview_cli <input.json>                     # Plan JSON to stdout
//!   heatview_cli <input.json> -o plan.json        # Plan JSON to file
//!   heatview_cli <input.json> --width 400 --summary

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use heatview::render::{paint, paint_legend, PaintMode, RecordingBackend};
use heatview::HeatmapDocument;

/// Compute a heatmap render plan from a JSON document
#[derive(Parser, Debug)]
#[command(name = "heatview_cli")]
#[command(version)]
#[command(about = "Lay out a heatmap document ({rows, columnLabels?, options?, width?, height?})")]
struct Args {
    /// Input JSON document
    input: PathBuf,

    /// Write the plan to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Container width in pixels (overrides the document)
    #[arg(long)]
    width: Option<f64>,

    /// Container height in pixels (overrides the document)
    #[arg(long)]
    height: Option<f64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Paint the plan on an in-memory surface and print a summary instead of JSON
    #[arg(long)]
    summary: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let document = HeatmapDocument::from_path(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    let (width, height) = document.container_size(args.width, args.height);
    info!(
        "Laying out {} rows in a {}x{} container",
        document.rows.len(),
        width,
        height
    );
    let plan = document
        .layout(Some(width), Some(height))
        .context("Layout failed")?;

    if args.summary {
        let mut surface = RecordingBackend::new();
        let mut report = paint(&plan, &mut surface, PaintMode::BestEffort)?;
        if let Some(legend) = &plan.legend {
            report.absorb(paint_legend(legend, &mut RecordingBackend::new(), PaintMode::BestEffort)?);
        }
        if !report.is_complete() {
            warn!("{} elements were skipped", report.skipped.len());
        }
        println!(
            "{} rows x {} columns (stride {}), cell {:.2}x{}, surface {}x{}, {:?}, {} elements painted",
            plan.rows.len(),
            plan.displayed_columns,
            plan.column_stride,
            plan.cell_width,
            plan.cell_height,
            plan.total_width,
            plan.total_height,
            plan.overflow,
            report.painted
        );
        return Ok(());
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&plan)?
    } else {
        serde_json::to_string(&plan)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &json).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Written: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
