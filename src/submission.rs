//! Submission records and filename-encoded weights.
//!
//! A submission's quality score is embedded in its filename: the literal
//! `submission_` followed by a contiguous run of decimal digits. The score
//! divided by 100 is the file's voting weight. Filenames without a parsable
//! score are skipped with a log line and contribute nothing anywhere, not
//! even with weight zero.

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use regex::Regex;
use tracing::{info, warn};

/// One contributing prediction file, with its voting weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub path: PathBuf,
    pub weight: f64,
}

/// Parse the filename-encoded score from anywhere in `path`.
/// Returns `None` when no `submission_<digits>` run exists.
pub fn extract_weight(path: &Path) -> Option<f64> {
    static RE_SCORE: OnceCell<Regex> = OnceCell::new();
    let re = RE_SCORE.get_or_init(|| Regex::new(r"submission_(\d+)").unwrap());

    let text = path.to_string_lossy();
    let caps = re.captures(&text)?;
    // Absurdly long digit runs overflow u64; treat them as unparsable.
    let score: u64 = caps[1].parse().ok()?;
    Some(score as f64 / 100.0)
}

/// Turn discovered paths into weighted submissions, logging each outcome.
/// Returns the submissions plus the number of skipped candidates.
pub fn collect(paths: &[PathBuf]) -> (Vec<Submission>, usize) {
    let mut submissions = Vec::with_capacity(paths.len());
    let mut skipped = 0usize;

    for path in paths {
        match extract_weight(path) {
            Some(weight) => {
                info!(file = %path.display(), weight, "found submission");
                submissions.push(Submission {
                    path: path.clone(),
                    weight,
                });
            }
            None => {
                warn!(file = %path.display(), "skipping: could not extract score from filename");
                skipped += 1;
            }
        }
    }

    (submissions, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_becomes_weight() {
        let w = extract_weight(Path::new("old/submission_80.csv")).unwrap();
        assert!((w - 0.80).abs() < 1e-9);

        let w = extract_weight(Path::new("old/submission_120.csv")).unwrap();
        assert!((w - 1.20).abs() < 1e-9);
    }

    #[test]
    fn leading_zeros_are_fine() {
        let w = extract_weight(Path::new("submission_075.csv")).unwrap();
        assert!((w - 0.75).abs() < 1e-9);
    }

    #[test]
    fn score_is_found_anywhere_in_the_path() {
        let w = extract_weight(Path::new("runs/day2/my_submission_90_final.csv")).unwrap();
        assert!((w - 0.90).abs() < 1e-9);
    }

    #[test]
    fn digitless_names_are_rejected() {
        assert!(extract_weight(Path::new("old/submission_abc.csv")).is_none());
        assert!(extract_weight(Path::new("old/submission_.csv")).is_none());
        assert!(extract_weight(Path::new("old/predictions_80.csv")).is_none());
    }

    #[test]
    fn overflowing_score_is_rejected() {
        let name = format!("submission_{}.csv", "9".repeat(40));
        assert!(extract_weight(Path::new(&name)).is_none());
    }

    #[test]
    fn collect_splits_valid_and_skipped() {
        let paths = vec![
            PathBuf::from("old/submission_60.csv"),
            PathBuf::from("old/submission_abc.csv"),
            PathBuf::from("old/submission_80.csv"),
        ];
        let (subs, skipped) = collect(&paths);
        assert_eq!(skipped, 1);
        assert_eq!(subs.len(), 2);
        assert!((subs[0].weight - 0.60).abs() < 1e-9);
        assert!((subs[1].weight - 0.80).abs() < 1e-9);
    }
}
