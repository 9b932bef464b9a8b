//! Configuration handling for the scanner.

use crate::filters::{MAX_DISTANCE, MIN_LEN_PACKAGE_NAME};
use crate::types::LineEndings;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Edit-distance typosquatting candidate finder.
#[derive(Parser, Debug, Clone)]
#[command(name = "squatscan")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Find names close to top packages
    Scan(ScanConfig),
    /// Print the edit distance between two names
    Distance(DistanceConfig),
}

/// Configuration for the distance command.
#[derive(Parser, Debug, Clone)]
pub struct DistanceConfig {
    /// First name
    pub first: String,

    /// Second name
    pub second: String,
}

/// Configuration for the scan command.
#[derive(Parser, Debug, Clone)]
pub struct ScanConfig {
    /// File with every package name in the registry (one per line)
    #[arg(short, long)]
    pub universe: PathBuf,

    /// File with the top package names to protect (defaults to the universe)
    #[arg(short, long)]
    pub top: Option<PathBuf>,

    /// File with known-legitimate names (one per line)
    #[arg(short, long)]
    pub whitelist: Option<PathBuf>,

    /// Minimum package name length to include
    #[arg(long, default_value_t = MIN_LEN_PACKAGE_NAME)]
    pub min_len: usize,

    /// Maximum edit distance to report
    #[arg(short = 'd', long, default_value_t = MAX_DISTANCE)]
    pub max_distance: usize,

    /// Lowercase all names before comparing
    #[arg(long)]
    pub ignore_case: bool,

    /// Spread distance computations over all CPU cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Strip only '\n' from whitelist lines (keep '\r' from CRLF files)
    #[arg(long)]
    pub strict_line_endings: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Output file path for the JSON report
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode: only show top packages with candidates
    #[arg(short, long)]
    pub quiet: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            universe: PathBuf::new(),
            top: None,
            whitelist: None,
            min_len: MIN_LEN_PACKAGE_NAME,
            max_distance: MAX_DISTANCE,
            ignore_case: false,
            parallel: false,
            strict_line_endings: false,
            json: false,
            output: None,
            quiet: false,
        }
    }
}

impl ScanConfig {
    /// Line ending handling for the whitelist loader.
    pub fn line_endings(&self) -> LineEndings {
        if self.strict_line_endings {
            LineEndings::Lf
        } else {
            LineEndings::Universal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_defaults() {
        let config = Config::parse_from(["squatscan", "scan", "--universe", "all.txt"]);
        let Commands::Scan(scan) = config.command else {
            panic!("Expected scan command");
        };

        assert_eq!(scan.universe, PathBuf::from("all.txt"));
        assert_eq!(scan.min_len, 5);
        assert_eq!(scan.max_distance, 1);
        assert!(scan.whitelist.is_none());
        assert_eq!(scan.line_endings(), LineEndings::Universal);
    }

    #[test]
    fn test_scan_flags() {
        let config = Config::parse_from([
            "squatscan",
            "-v",
            "scan",
            "-u",
            "all.txt",
            "--top",
            "top.txt",
            "--whitelist",
            "whitelist.txt",
            "--min-len",
            "3",
            "-d",
            "2",
            "--strict-line-endings",
            "--json",
        ]);
        assert!(config.verbose);

        let Commands::Scan(scan) = config.command else {
            panic!("Expected scan command");
        };
        assert_eq!(scan.top, Some(PathBuf::from("top.txt")));
        assert_eq!(scan.min_len, 3);
        assert_eq!(scan.max_distance, 2);
        assert!(scan.json);
        assert_eq!(scan.line_endings(), LineEndings::Lf);
    }

    #[test]
    fn test_distance_command() {
        let config = Config::parse_from(["squatscan", "distance", "requests", "reqests"]);
        let Commands::Distance(distance) = config.command else {
            panic!("Expected distance command");
        };
        assert_eq!(distance.first, "requests");
        assert_eq!(distance.second, "reqests");
    }

    #[test]
    fn test_default_matches_cli_defaults() {
        let defaults = ScanConfig::default();
        assert_eq!(defaults.min_len, MIN_LEN_PACKAGE_NAME);
        assert_eq!(defaults.max_distance, MAX_DISTANCE);
    }
}
