//! Typed errors for submission file operations.
//!
//! Each file-level operation gets a distinct signal (read failure, empty
//! file, missing column) so callers can decide between abort, skip, and
//! swallow. The run boundary wraps these with `anyhow::Context`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnsembleError {
    /// Opening or reading a submission file failed.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file had no header row at all.
    #[error("{} is empty: no header row", path.display())]
    Empty { path: PathBuf },

    /// The header row had fewer than two columns.
    #[error("{} has no prediction column in its header", path.display())]
    MissingPredictionColumn { path: PathBuf },

    /// Writing the consensus output failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_path() {
        let e = EnsembleError::Empty {
            path: PathBuf::from("old/submission_80.csv"),
        };
        assert!(e.to_string().contains("old/submission_80.csv"));

        let e = EnsembleError::MissingPredictionColumn {
            path: PathBuf::from("old/submission_60.csv"),
        };
        assert!(e.to_string().contains("prediction column"));
    }
}
