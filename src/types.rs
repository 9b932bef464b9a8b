//! Core types and errors for the typosquatting scanner.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during a scan.
#[derive(Error, Debug)]
pub enum SquatError {
    /// A whitelist or name list could not be opened or read.
    #[error("Cannot read {}: {}", path.display(), source)]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, SquatError>;

/// Reference package name mapped to the names found close to it.
///
/// Keys iterate in sorted order so reports are reproducible; each value list
/// keeps the order in which names appeared in the universe.
pub type CandidateMap = BTreeMap<String, Vec<String>>;

/// How the whitelist loader treats line terminators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineEndings {
    /// Strip only `\n`. A `\r` left over from CRLF files stays part of the name.
    Lf,
    /// Strip `\n` and a `\r` directly before it.
    #[default]
    Universal,
}

/// Counters collected while running the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Names in the universe before length filtering.
    pub universe_size: usize,
    /// Names left after length filtering.
    pub filtered_size: usize,
    /// Reference names compared against the filtered universe.
    pub references_checked: usize,
    /// Total candidates found by the distance matcher.
    pub candidates_before_whitelist: usize,
    /// Total candidates surviving the whitelist.
    pub candidates_after_whitelist: usize,
    /// Candidates dropped because they are whitelisted.
    pub whitelisted_removed: usize,
}

/// Complete result of one scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub stats: ScanStats,
    /// Reference names with their surviving typosquat candidates.
    pub candidates: CandidateMap,
    /// Scan duration in seconds.
    pub duration_secs: f64,
}

impl ScanReport {
    /// Reference names that still have at least one candidate.
    pub fn flagged(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.candidates.iter().filter(|(_, names)| !names.is_empty())
    }

    /// Number of reference names with at least one candidate.
    pub fn flagged_count(&self) -> usize {
        self.flagged().count()
    }

    /// Pretty-printed JSON form of the report.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON report to `path`.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Total number of candidate names across all entries.
pub fn count_candidates(candidates: &CandidateMap) -> usize {
    candidates.values().map(Vec::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_candidates() {
        let mut map = CandidateMap::new();
        map.insert("requests".to_string(), vec!["reqeusts".to_string(), "requestts".to_string()]);
        map.insert("lodash".to_string(), vec![]);
        assert_eq!(count_candidates(&map), 2);
    }

    #[test]
    fn test_flagged_skips_empty_entries() {
        let mut candidates = CandidateMap::new();
        candidates.insert("requests".to_string(), vec!["requestts".to_string()]);
        candidates.insert("lodash".to_string(), vec![]);
        let report = ScanReport {
            stats: ScanStats::default(),
            candidates,
            duration_secs: 0.0,
        };

        assert_eq!(report.flagged_count(), 1);
        let (name, _) = report.flagged().next().unwrap();
        assert_eq!(name, "requests");
    }

    #[test]
    fn test_write_json() {
        let mut candidates = CandidateMap::new();
        candidates.insert("requests".to_string(), vec!["requestts".to_string()]);
        let report = ScanReport {
            stats: ScanStats::default(),
            candidates,
            duration_secs: 0.5,
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        report.write_json(&path).unwrap();

        let written: ScanReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.candidates, report.candidates);
        assert_eq!(written.stats, report.stats);
    }

    #[test]
    fn test_write_json_to_missing_dir_is_io_error() {
        let report = ScanReport {
            stats: ScanStats::default(),
            candidates: CandidateMap::new(),
            duration_secs: 0.0,
        };

        let dir = tempfile::tempdir().unwrap();
        let err = report
            .write_json(&dir.path().join("missing").join("report.json"))
            .unwrap_err();
        assert!(matches!(err, SquatError::IoError(_)));
    }

    #[test]
    fn test_resource_not_found_message() {
        let err = SquatError::ResourceNotFound {
            path: PathBuf::from("whitelist.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("whitelist.txt"));
    }
}
