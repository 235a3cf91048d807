//! # Ensemble Engine
//! The whole pipeline, run once per invocation: discovery, weight
//! extraction, reference shape, weighted tally, decision, output, and the
//! best-effort diagnostic.
//!
//! Policy: the two no-input conditions end the run cleanly with `Ok(None)`;
//! a reference file that cannot be read is fatal; a tally-time read error
//! drops that one file's contribution and the run continues.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::accumulator::VoteAccumulator;
use crate::config::EnsembleConfig;
use crate::discovery;
use crate::report::{self, RunReport};
use crate::submission;
use crate::table;

/// Run the ensemble once. `Ok(None)` means there was nothing to blend and
/// no output was written.
pub fn run(cfg: &EnsembleConfig) -> Result<Option<RunReport>> {
    // 1) Discovery
    info!(dir = %cfg.submissions_dir.display(), "scanning for submission files");
    let candidates = discovery::discover(cfg);
    if candidates.is_empty() {
        info!("no submission files found, nothing to do");
        return Ok(None);
    }

    // 2) Weights from filenames
    let (submissions, skipped) = submission::collect(&candidates);
    if submissions.is_empty() {
        warn!("no valid submission files found");
        return Ok(None);
    }
    info!(count = submissions.len(), "loaded files for ensemble");

    // 3) Reference shape: identifiers, headers, and row count all come from
    //    the first submission. Without it nothing downstream can proceed.
    let reference = &submissions[0];
    let base = table::read_prediction_file(&reference.path)
        .with_context(|| format!("reading reference file {}", reference.path.display()))?;

    // 4) Weighted tally; the reference file is reprocessed like any other.
    let mut accumulator = VoteAccumulator::new(base.len());
    let mut blended = 0usize;
    for sub in &submissions {
        info!(file = %sub.path.display(), weight = sub.weight, "processing");
        match table::read_prediction_file(&sub.path) {
            Ok(t) => {
                if t.len() != accumulator.len() {
                    warn!(
                        file = %sub.path.display(),
                        rows = t.len(),
                        expected = accumulator.len(),
                        "row count differs from reference, voting over the overlap"
                    );
                }
                accumulator.apply(&t.predictions, sub.weight);
                blended += 1;
            }
            Err(e) => {
                warn!(error = %e, file = %sub.path.display(), "dropping file from ensemble");
            }
        }
    }

    // 5) Decision
    info!("calculating consensus");
    let decisions = accumulator.decide();

    // 6) Output
    let output = cfg.output_path();
    table::write_predictions(
        &output,
        &base.id_header,
        &base.prediction_header,
        &base.ids,
        &decisions,
    )
    .with_context(|| format!("writing ensemble output {}", output.display()))?;
    info!(file = %output.display(), rows = decisions.len(), "ensemble generated");

    // 7) Diagnostic: disagreement vs the best single input, advisory only.
    let best_model = report::compare_with_best(&submissions, &decisions);
    if let Some(diff) = &best_model {
        info!(
            file = %diff.file,
            weight = diff.weight,
            changed = diff.changed_rows,
            "ensemble changed predictions compared to the best single file"
        );
    }

    Ok(Some(RunReport {
        candidates: candidates.len(),
        skipped,
        blended,
        rows: decisions.len(),
        output: output.display().to_string(),
        best_model,
    }))
}
