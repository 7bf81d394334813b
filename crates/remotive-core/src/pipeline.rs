//! Fetch → transform → write, run once.
//!
//! Each stage failure turns into a skip except write errors, which are
//! returned. Nothing here panics on bad input from the network.

use serde_json::Value;
use std::path::Path;

use crate::config::AppConfig;
use crate::export::{write_csv, ExportOutcome, SkipReason, WriteError};
use crate::fetch::{fetch_json, FetchError};
use crate::jobs::{clean_jobs, extract_jobs, JobRecord};

/// Fetch the configured endpoint, logging the outcome.
pub fn fetch_payload(cfg: &AppConfig) -> Result<Value, FetchError> {
    tracing::info!("fetching {}", cfg.endpoint);
    match fetch_json(&cfg.endpoint, &cfg.http_options()) {
        Ok(v) => {
            tracing::info!("fetched payload from {}", cfg.endpoint);
            Ok(v)
        }
        Err(e) => {
            tracing::error!("fetch {} failed: {}", cfg.endpoint, e);
            Err(e)
        }
    }
}

/// Job list from an optional payload; `None` means the fetch failed.
pub fn jobs_from_payload(payload: Option<&Value>) -> Result<Vec<JobRecord>, SkipReason> {
    let payload = payload.ok_or(SkipReason::NoPayload)?;
    let jobs = extract_jobs(payload).map_err(|e| {
        tracing::warn!("unusable payload: {}", e);
        SkipReason::BadPayload(e.to_string())
    })?;
    if jobs.is_empty() {
        return Err(SkipReason::NoJobs);
    }
    tracing::debug!("extracted {} jobs", jobs.len());
    Ok(jobs)
}

/// Transform and write half of the pipeline.
pub fn export_payload(payload: Option<&Value>, output: &Path) -> Result<ExportOutcome, WriteError> {
    match jobs_from_payload(payload) {
        Ok(jobs) => write_csv(&jobs, output),
        Err(reason) => {
            tracing::info!("skipping CSV export: {}", reason);
            Ok(ExportOutcome::Skipped(reason))
        }
    }
}

/// Whole pipeline against `cfg.endpoint`, writing to `output`.
///
/// A fetch failure is returned as [`SkipReason::FetchFailed`] with the
/// error text; no file is touched.
pub fn run_export(cfg: &AppConfig, output: &Path) -> Result<ExportOutcome, WriteError> {
    match fetch_payload(cfg) {
        Ok(payload) => export_payload(Some(&payload), output),
        Err(e) => Ok(ExportOutcome::Skipped(SkipReason::FetchFailed(e.to_string()))),
    }
}

/// Fetch and return the jobs with cleaned descriptions, without writing.
pub fn fetch_clean_jobs(cfg: &AppConfig) -> Result<Vec<JobRecord>, SkipReason> {
    let payload = fetch_payload(cfg).map_err(|e| SkipReason::FetchFailed(e.to_string()))?;
    jobs_from_payload(Some(&payload)).map(clean_jobs)
}
