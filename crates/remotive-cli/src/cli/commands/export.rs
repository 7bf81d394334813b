//! `remotive-csv [export]` – fetch the feed and write the CSV.

use anyhow::Result;
use remotive_core::config::AppConfig;
use remotive_core::export::{ExportOutcome, SkipReason};
use remotive_core::pipeline;
use std::path::Path;

/// Runs the export and prints one status line per stage. Fetch and write
/// failures are reported, not returned; the process still exits 0.
pub fn run_export(cfg: &AppConfig, output: &Path) -> Result<()> {
    let outcome = pipeline::run_export(cfg, output);
    if !matches!(outcome, Ok(ExportOutcome::Skipped(SkipReason::FetchFailed(_)))) {
        println!("Data fetched successfully from {}.", cfg.endpoint);
    }

    match outcome {
        Ok(ExportOutcome::Written(report)) => {
            println!(
                "CSV file '{}' created successfully ({} jobs, sha256 {}).",
                report.path.display(),
                report.rows,
                report.sha256
            );
        }
        Ok(ExportOutcome::Skipped(reason @ SkipReason::FetchFailed(_))) => eprintln!("{}", reason),
        Ok(ExportOutcome::Skipped(reason)) => println!("{}", reason),
        Err(e) => {
            tracing::error!("CSV export failed: {}", e);
            eprintln!("Error writing to CSV file: {}", e);
        }
    }
    Ok(())
}
