//! Colored console output for scan reports.

use crate::types::ScanReport;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::error;

/// Console output handler with colors and formatting.
pub struct ConsoleOutput {
    verbose: bool,
    json_mode: bool,
    quiet: bool,
}

impl ConsoleOutput {
    /// Create a new console output handler.
    pub fn new(verbose: bool, json_mode: bool, quiet: bool) -> Self {
        Self { verbose, json_mode, quiet }
    }

    /// Print scan start message.
    pub fn print_scan_start(&self, references: usize, universe: usize) {
        if self.json_mode || self.quiet {
            return;
        }

        println!(
            "{} Comparing {} top packages against {} names",
            "[*]".bright_blue(),
            references.to_string().bright_white(),
            universe.to_string().bright_white()
        );
    }

    /// Print scan progress (only in verbose mode).
    pub fn print_progress(&self, message: &str) {
        if self.json_mode || !self.verbose {
            return;
        }

        println!("{} {}", "[.]".dimmed(), message.dimmed());
    }

    /// Print the candidates found for one top package.
    pub fn print_candidates(&self, reference: &str, candidates: &[String]) {
        if self.json_mode || candidates.is_empty() {
            return;
        }

        println!();
        println!(
            "{} {} [{}]",
            "===".bright_cyan(),
            reference.bright_white().bold(),
            format!("{} candidate(s)", candidates.len()).red().bold()
        );

        let last = candidates.len() - 1;
        for (i, name) in candidates.iter().enumerate() {
            let branch = if i == last { "+--" } else { "|--" };
            println!("    {} {}", branch, name.yellow());
        }
    }

    /// Print the full report.
    pub fn print_report(&self, report: &ScanReport) {
        if self.json_mode {
            match report.to_json() {
                Ok(json) => println!("{}", json),
                Err(e) => error!("Failed to serialize report: {}", e),
            }
            return;
        }

        for (reference, candidates) in report.flagged() {
            self.print_candidates(reference, candidates);
        }

        self.print_summary(report);
    }

    /// Print scan summary.
    pub fn print_summary(&self, report: &ScanReport) {
        if self.json_mode {
            return;
        }

        let flagged = report.flagged_count();

        // In quiet mode, only print if something was flagged
        if self.quiet && flagged == 0 {
            return;
        }

        let stats = &report.stats;
        println!();
        println!("{}", "=== Scan Summary ===".bright_cyan());
        println!("  Duration:     {:.2}s", report.duration_secs);
        println!(
            "  Universe:     {} names ({} after length filter)",
            stats.universe_size, stats.filtered_size
        );
        println!("  Top packages: {}", stats.references_checked);
        println!(
            "  Candidates:   {} ({} whitelisted)",
            stats.candidates_after_whitelist, stats.whitelisted_removed
        );

        if flagged > 0 {
            println!(
                "  {}",
                format!("POTENTIAL TYPOSQUATS FOUND FOR {} PACKAGES", flagged)
                    .red()
                    .bold()
            );
        } else {
            println!("  {}", "No typosquatting candidates found.".green());
        }

        println!();
    }

    /// Create a progress bar.
    pub fn create_progress_bar(&self, total: u64, message: &str) -> Option<ProgressBar> {
        if self.json_mode || self.quiet {
            return None;
        }

        let pb = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        pb.set_message(message.to_string());
        Some(pb)
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new(false, false, false)
    }
}
