//! Sequential CSV writer with a running SHA-256 of the output bytes.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use super::{ExportOutcome, ExportReport, SkipReason, WriteError};
use crate::jobs::{JobRecord, COLUMNS};

/// Passes bytes through to `inner` and hashes exactly what was accepted.
struct HashingWriter<W> {
    inner: W,
    hasher: Sha256,
}

impl<W: Write> HashingWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: Sha256::new(),
        }
    }

    fn finish(self) -> (W, String) {
        (self.inner, hex::encode(self.hasher.finalize()))
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Write `jobs` to `path` as CSV: header row, then one row per job in order.
///
/// The file is truncated first. An empty `jobs` slice writes nothing and
/// returns [`ExportOutcome::Skipped`]. Rows use CRLF terminators and quote
/// only fields that need it.
pub fn write_csv(jobs: &[JobRecord], path: &Path) -> Result<ExportOutcome, WriteError> {
    if jobs.is_empty() {
        tracing::info!("no jobs to write; leaving {} untouched", path.display());
        return Ok(ExportOutcome::Skipped(SkipReason::NoJobs));
    }

    let file = File::create(path).map_err(|e| WriteError::io(path, e))?;
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(HashingWriter::new(file));

    wtr.write_record(COLUMNS)
        .map_err(|e| WriteError::csv(path, e))?;
    for job in jobs {
        wtr.write_record(job.to_row())
            .map_err(|e| WriteError::csv(path, e))?;
    }
    wtr.flush().map_err(|e| WriteError::io(path, e))?;

    let hashing = wtr
        .into_inner()
        .map_err(|e| WriteError::io(path, e.into_error()))?;
    let (file, sha256) = hashing.finish();
    drop(file);

    tracing::info!(
        "wrote {} job rows to {} (sha256 {})",
        jobs.len(),
        path.display(),
        sha256
    );
    Ok(ExportOutcome::Written(ExportReport {
        path: path.to_path_buf(),
        rows: jobs.len(),
        sha256,
    }))
}
