//! CSV export of job records.
//!
//! An empty job list never produces a file: the export is reported as
//! skipped instead, so a failed or empty feed cannot clobber a previous
//! good CSV with a header-only one.

mod error;
mod writer;

pub use error::WriteError;
pub use writer::write_csv;

use std::fmt;
use std::path::PathBuf;

/// What a completed write produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Destination that was (over)written.
    pub path: PathBuf,
    /// Data rows written, header excluded.
    pub rows: usize,
    /// Lowercase hex SHA-256 of the bytes written.
    pub sha256: String,
}

/// Why nothing was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The feed could not be fetched or decoded; carries the error text.
    FetchFailed(String),
    /// No payload was handed to the transform stage.
    NoPayload,
    /// The feed decoded but is not `{"jobs": [...]}`.
    BadPayload(String),
    /// The feed has no jobs.
    NoJobs,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::FetchFailed(msg) => {
                write!(f, "Error fetching data: {}; JSON data not retrieved.", msg)
            }
            SkipReason::NoPayload => write!(f, "JSON data not retrieved."),
            SkipReason::BadPayload(msg) => write!(f, "unexpected JSON payload: {}", msg),
            SkipReason::NoJobs => write!(f, "No jobs found in JSON data."),
        }
    }
}

/// Result of an export attempt that did not hit a write error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written(ExportReport),
    Skipped(SkipReason),
}

impl ExportOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, ExportOutcome::Written(_))
    }
}
