//! Submission discovery under the fixed scan directory.
//!
//! Keeps `submission_*.csv` entries, drops the designated output file so a
//! prior run is never re-ingested, and sorts the result lexicographically so
//! processing order (and therefore the reference file) is reproducible
//! across platforms.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::{EnsembleConfig, SUBMISSION_EXTENSION, SUBMISSION_PREFIX};

/// List candidate submission files. A missing or unreadable scan directory
/// is a normal "nothing to do" outcome, not an error.
pub fn discover(cfg: &EnsembleConfig) -> Vec<PathBuf> {
    let read_dir = match fs::read_dir(&cfg.submissions_dir) {
        Ok(d) => d,
        Err(_) => {
            info!(dir = %cfg.submissions_dir.display(), "scan directory not readable");
            return Vec::new();
        }
    };

    let mut found = Vec::new();
    for entry in read_dir.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if !name.starts_with(SUBMISSION_PREFIX) {
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some(SUBMISSION_EXTENSION) {
            continue;
        }
        if name == cfg.output_filename {
            debug!(file = %path.display(), "excluding prior ensemble output from scan");
            continue;
        }
        found.push(path);
    }

    found.sort();
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &std::path::Path) {
        fs::write(path, "id,target\n1,0\n").unwrap();
    }

    fn cfg_for(root: &std::path::Path) -> EnsembleConfig {
        let cfg = EnsembleConfig::rooted_at(root);
        fs::create_dir_all(&cfg.submissions_dir).unwrap();
        cfg
    }

    #[test]
    fn finds_matching_files_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = cfg_for(tmp.path());

        touch(&cfg.submissions_dir.join("submission_90.csv"));
        touch(&cfg.submissions_dir.join("submission_120.csv"));
        touch(&cfg.submissions_dir.join("submission_85.csv"));

        let names: Vec<String> = discover(&cfg)
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "submission_120.csv",
                "submission_85.csv",
                "submission_90.csv"
            ]
        );
    }

    #[test]
    fn ignores_non_matching_names() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = cfg_for(tmp.path());

        touch(&cfg.submissions_dir.join("submission_90.csv"));
        touch(&cfg.submissions_dir.join("results_90.csv"));
        touch(&cfg.submissions_dir.join("submission_90.txt"));
        touch(&cfg.submissions_dir.join("notes.md"));

        let found = discover(&cfg);
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("submission_90.csv"));
    }

    #[test]
    fn excludes_the_output_filename() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = cfg_for(tmp.path());

        touch(&cfg.submissions_dir.join("submission_90.csv"));
        touch(&cfg.submissions_dir.join(&cfg.output_filename));

        let found = discover(&cfg);
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("submission_90.csv"));
    }

    #[test]
    fn missing_scan_dir_yields_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = EnsembleConfig::rooted_at(tmp.path()); // old/ never created
        assert!(discover(&cfg).is_empty());
    }
}
