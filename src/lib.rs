//! squatscan - Edit-distance typosquatting candidate finder.
//!
//! This library flags package names that sit suspiciously close to popular
//! ("top") package names by:
//! - Dropping names too short to give a meaningful signal
//! - Collecting every name within a Levenshtein distance of each top package
//! - Removing known-legitimate names listed in a whitelist file
//!
//! # Example
//!
//! ```
//! use squatscan::filters::{filter_by_length, find_close_names};
//!
//! let universe: Vec<String> = ["requests", "requestts", "lodash", "req"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! let filtered = filter_by_length(&universe, 5);
//! let close = find_close_names("requests", &filtered, 1);
//! assert_eq!(close, vec!["requestts".to_string()]);
//! ```

pub mod config;
pub mod filters;
pub mod names;
pub mod notify;
pub mod scanner;
pub mod types;

pub use config::{Commands, Config, DistanceConfig, ScanConfig};
pub use scanner::Scanner;
pub use types::{CandidateMap, LineEndings, Result, ScanReport, ScanStats, SquatError};
