use std::path::PathBuf;
use thiserror::Error;

use crate::types::Issue;

/// Fatal errors. Any of these stops the read; partial results are dropped.
///
/// Per-line problems that do not stop a read are reported as [`Issue`]s
/// instead. The scanning variants keep the issues collected before the stop.
#[derive(Debug, Error)]
pub enum KvFileError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed while scanning {path} (line {line}): {source}")]
    Scan {
        path: PathBuf,
        line: usize,
        source: std::io::Error,
        issues: Vec<Issue>,
    },

    #[error("Missing section header before line {line} in {path}")]
    MissingSection {
        path: PathBuf,
        line: usize,
        issues: Vec<Issue>,
    },

    #[error("Failed to deserialize sections: {source}")]
    Deserialize { source: toml::de::Error },
}
