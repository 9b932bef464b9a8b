//! Main scanner orchestrating the filter pipeline.

use crate::config::ScanConfig;
use crate::filters::distance::build_candidate_map_with;
use crate::filters::{filter_by_length, load_whitelist, Whitelist};
use crate::names::{load_names, lowercase_all};
use crate::notify::ConsoleOutput;
use crate::types::{count_candidates, Result, ScanReport, ScanStats, SquatError};
use std::time::Instant;
use tracing::{debug, info};

/// Main scanner that runs length filter, distance matcher and whitelist.
pub struct Scanner {
    config: ScanConfig,
    whitelist: Option<Whitelist>,
    console: ConsoleOutput,
}

impl Scanner {
    /// Create a new scanner, loading the whitelist if one is configured.
    pub fn new(config: ScanConfig) -> Result<Self> {
        let whitelist = match config.whitelist {
            Some(ref path) => Some(fold_whitelist(
                &config,
                load_whitelist(path, config.line_endings())?,
            )),
            None => None,
        };

        let console = ConsoleOutput::new(false, config.json, config.quiet);

        Ok(Self {
            config,
            whitelist,
            console,
        })
    }

    /// Use an already loaded whitelist instead of the configured file.
    pub fn with_whitelist(mut self, whitelist: Whitelist) -> Self {
        self.whitelist = Some(fold_whitelist(&self.config, whitelist));
        self
    }

    /// Enable verbose console progress messages.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.console = ConsoleOutput::new(verbose, self.config.json, self.config.quiet);
        self
    }

    /// Load the configured name files and scan them.
    pub fn run(&self) -> Result<ScanReport> {
        let universe = load_names(&self.config.universe)?;
        if universe.is_empty() {
            return Err(SquatError::ConfigError(format!(
                "Universe file {:?} contains no names",
                self.config.universe
            )));
        }

        let top = match self.config.top {
            Some(ref path) => Some(load_names(path)?),
            None => None,
        };

        self.scan(top.as_deref(), &universe)
    }

    /// Scan in-memory name lists.
    ///
    /// Without `top`, every name of the length-filtered universe is used as a
    /// reference.
    pub fn scan(&self, top: Option<&[String]>, universe: &[String]) -> Result<ScanReport> {
        let start_time = Instant::now();

        let (top, universe) = if self.config.ignore_case {
            (top.map(lowercase_all), lowercase_all(universe))
        } else {
            (top.map(<[String]>::to_vec), universe.to_vec())
        };

        let filtered = filter_by_length(&universe, self.config.min_len);
        let references = top.unwrap_or_else(|| filtered.clone());

        self.console.print_scan_start(references.len(), filtered.len());
        self.console.print_progress(&format!(
            "Length filter kept {} of {} names",
            filtered.len(),
            universe.len()
        ));

        let pb = self
            .console
            .create_progress_bar(references.len() as u64, "Matching");

        let mut candidates = build_candidate_map_with(
            &references,
            &filtered,
            self.config.max_distance,
            self.config.parallel,
            |_, _| {
                if let Some(ref pb) = pb {
                    pb.inc(1);
                }
            },
        );

        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        let candidates_before_whitelist = count_candidates(&candidates);

        let whitelisted_removed = match self.whitelist {
            Some(ref whitelist) => {
                let removed = whitelist.retain_unlisted(&mut candidates);
                debug!("Whitelist removed {} candidates", removed);
                removed
            }
            None => 0,
        };

        let stats = ScanStats {
            universe_size: universe.len(),
            filtered_size: filtered.len(),
            references_checked: candidates.len(),
            candidates_before_whitelist,
            candidates_after_whitelist: count_candidates(&candidates),
            whitelisted_removed,
        };

        info!(
            "Found {} candidates for {} top packages ({} whitelisted)",
            stats.candidates_after_whitelist, stats.references_checked, stats.whitelisted_removed
        );

        Ok(ScanReport {
            stats,
            candidates,
            duration_secs: start_time.elapsed().as_secs_f64(),
        })
    }

    /// Print the report to the console (or as JSON in JSON mode).
    pub fn print_report(&self, report: &ScanReport) {
        self.console.print_report(report);
    }
}

/// Whitelist names must be folded the same way as the names they are
/// compared against.
fn fold_whitelist(config: &ScanConfig, whitelist: Whitelist) -> Whitelist {
    if config.ignore_case {
        whitelist.to_lowercase()
    } else {
        whitelist
    }
}
