use std::path::PathBuf;
use thiserror::Error;

/// Recoverable errors surfaced by the I/O layer and pipeline entry points.
///
/// Dimension mismatches in vector/matrix arithmetic are deliberately *not*
/// represented here: they indicate an upstream programming error (a
/// miscomputed vocabulary or step count) and panic instead.
#[derive(Debug, Error)]
pub enum AlignError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: malformed value {value:?}")]
    MalformedValue {
        path: PathBuf,
        line: usize,
        value: String,
    },

    #[error("matrix file {path} is empty")]
    EmptyMatrix { path: PathBuf },

    #[error("matrix file {path}:{line}: expected {expected} columns, found {found}")]
    RaggedMatrix {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl AlignError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AlignError::Io {
            path: path.into(),
            source,
        }
    }
}
