//! Write error type.

use std::path::PathBuf;

/// Filesystem or CSV encoding failure while writing the output file.
/// Whatever was already written stays on disk.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("encoding CSV for {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl WriteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WriteError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        WriteError::Csv {
            path: path.into(),
            source,
        }
    }

    /// Path of the file that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            WriteError::Io { path, .. } | WriteError::Csv { path, .. } => path,
        }
    }
}
