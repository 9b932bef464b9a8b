//! Typosquatting filters.
//!
//! The pipeline runs these in order:
//! - Length filter (drop names too short to give a useful signal)
//! - Distance matcher (names within an edit distance of a reference name)
//! - Whitelist filter (drop known-legitimate candidates)

pub mod distance;
pub mod length;
pub mod whitelist;

pub use distance::{
    build_candidate_map, find_close_names, find_close_names_par, levenshtein, MAX_DISTANCE,
};
pub use length::{filter_by_length, MIN_LEN_PACKAGE_NAME};
pub use whitelist::{apply_whitelist, load_whitelist, Whitelist};
