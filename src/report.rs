//! Run summary and the best-single-model diagnostic.
//!
//! `RunReport` is what a completed run hands back: counts for
//! explainability plus the optional disagreement diagnostic. The diagnostic
//! compares the consensus against the highest-weighted input and is
//! advisory only — any failure inside it yields `None`, never an error.

use serde::{Deserialize, Serialize};

use crate::submission::Submission;
use crate::table;

/// Summary of one completed ensemble run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Candidate files that matched the filename pattern.
    pub candidates: usize,
    /// Candidates dropped for an unparsable score.
    pub skipped: usize,
    /// Files whose votes were blended.
    pub blended: usize,
    /// Identifier rows in the consensus.
    pub rows: usize,
    /// Where the consensus was written.
    pub output: String,
    /// Disagreement against the best single input, when it could be computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_model: Option<BestModelDiff>,
}

/// How far the consensus moved from the single highest-weighted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestModelDiff {
    pub file: String,
    pub weight: f64,
    /// Rows where the consensus differs from that input.
    pub changed_rows: usize,
}

/// The highest-weighted submission; ties break toward the earliest in
/// processing order.
pub fn best_submission(submissions: &[Submission]) -> Option<&Submission> {
    let mut best: Option<&Submission> = None;
    for sub in submissions {
        match best {
            Some(b) if sub.weight <= b.weight => {}
            _ => best = Some(sub),
        }
    }
    best
}

/// Re-read the best submission and count rows where it disagrees with the
/// final decisions. Returns `None` on any failure (file gone, shape drift);
/// the diagnostic must never fail the run.
pub fn compare_with_best(submissions: &[Submission], decisions: &[u8]) -> Option<BestModelDiff> {
    let best = best_submission(submissions)?;
    let best_table = table::read_prediction_file(&best.path).ok()?;
    if best_table.len() != decisions.len() {
        return None;
    }

    let changed_rows = best_table
        .predictions
        .iter()
        .zip(decisions)
        .filter(|(prediction, decision)| **prediction != Some(**decision))
        .count();

    Some(BestModelDiff {
        file: best.path.display().to_string(),
        weight: best.weight,
        changed_rows,
    })
}
