//! Minimum name length filter.

use tracing::debug;

/// Minimum length of a package name to be included in the analysis.
///
/// Names of 1-4 characters sit one edit away from a huge share of the
/// registry, so matching them produces mostly noise.
pub const MIN_LEN_PACKAGE_NAME: usize = 5;

/// Keep names with at least `min_len` characters, in their original order.
pub fn filter_by_length(names: &[String], min_len: usize) -> Vec<String> {
    let filtered: Vec<String> = names
        .iter()
        .filter(|name| name.chars().count() >= min_len)
        .cloned()
        .collect();

    debug!(
        "Length filter (min {}): kept {} of {} names",
        min_len,
        filtered.len(),
        names.len()
    );

    filtered
}
