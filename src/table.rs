//! Best-effort reading and writing of two-column prediction files.
//!
//! A submission file is comma-separated with a header row: first column the
//! row identifier (kept verbatim, any type), second column the binary
//! prediction. Predictions are compared numerically, so `1` and `1.0` both
//! count as class 1; anything else classifies as neither class and votes for
//! nothing. Structure beyond that gets no validation — the one hard
//! requirement is a header with at least two columns.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::EnsembleError;

/// Parsed contents of one prediction file.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionTable {
    pub id_header: String,
    pub prediction_header: String,
    /// Row identifiers, verbatim.
    pub ids: Vec<String>,
    /// Per-row class, `None` for anything that is not exactly 0 or 1.
    pub predictions: Vec<Option<u8>>,
}

impl PredictionTable {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Classify a raw field as class 1, class 0, or neither.
fn classify_prediction(raw: &str) -> Option<u8> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v == 1.0 => Some(1),
        Ok(v) if v == 0.0 => Some(0),
        _ => None,
    }
}

/// Read one prediction file. Blank lines are skipped, a trailing `\r` is
/// tolerated, and a row without a second field simply predicts neither
/// class.
pub fn read_prediction_file(path: &Path) -> Result<PredictionTable, EnsembleError> {
    let file = File::open(path).map_err(|e| EnsembleError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut lines = BufReader::new(file).lines();

    let header = match lines.next() {
        Some(Ok(h)) => h,
        Some(Err(e)) => {
            return Err(EnsembleError::Read {
                path: path.to_path_buf(),
                source: e,
            })
        }
        None => {
            return Err(EnsembleError::Empty {
                path: path.to_path_buf(),
            })
        }
    };
    let header = header.strip_suffix('\r').unwrap_or(&header);

    let mut columns = header.split(',');
    let id_header = columns
        .next()
        .unwrap_or_default()
        .to_string();
    let prediction_header = columns
        .next()
        .ok_or_else(|| EnsembleError::MissingPredictionColumn {
            path: path.to_path_buf(),
        })?
        .to_string();

    let mut ids = Vec::new();
    let mut predictions = Vec::new();
    for line in lines {
        let line = line.map_err(|e| EnsembleError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split(',');
        ids.push(fields.next().unwrap_or_default().to_string());
        predictions.push(fields.next().and_then(classify_prediction));
    }

    Ok(PredictionTable {
        id_header,
        prediction_header,
        ids,
        predictions,
    })
}

/// Write the consensus file: reference headers, one `id,decision` row per
/// identifier, no index column. Overwrites any existing file.
pub fn write_predictions(
    path: &Path,
    id_header: &str,
    prediction_header: &str,
    ids: &[String],
    decisions: &[u8],
) -> Result<(), EnsembleError> {
    let mut out = String::with_capacity(ids.len() * 8 + 32);
    out.push_str(id_header);
    out.push(',');
    out.push_str(prediction_header);
    out.push('\n');
    for (id, decision) in ids.iter().zip(decisions) {
        out.push_str(id);
        out.push(',');
        out.push_str(if *decision == 1 { "1" } else { "0" });
        out.push('\n');
    }

    fs::write(path, out).map_err(|e| EnsembleError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
