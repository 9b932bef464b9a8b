//! Edit distance matching between a reference name and a name universe.

use crate::types::CandidateMap;
use rayon::prelude::*;
use tracing::{debug, trace};

/// Edit distance threshold to consider a name a typosquat candidate.
pub const MAX_DISTANCE: usize = 1;

/// Levenshtein distance between two names, counted in characters.
///
/// Insertions, deletions and substitutions each cost 1. The distance to an
/// empty string is the character length of the other string.
pub fn levenshtein(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Check whether `candidate` is within `max_distance` edits of `reference`.
///
/// Exact matches are never close: a name is not its own typosquat.
fn is_close(reference: &str, reference_len: usize, candidate: &str, max_distance: usize) -> bool {
    if candidate == reference {
        return false;
    }

    // The length difference is a lower bound on the edit distance
    if reference_len.abs_diff(candidate.chars().count()) > max_distance {
        return false;
    }

    let distance = levenshtein(reference, candidate);
    if distance <= max_distance {
        trace!("{} is {} edit(s) from {}", candidate, distance, reference);
        true
    } else {
        false
    }
}

/// Find all names in `universe` within `max_distance` edits of `reference`.
///
/// Every element equal to `reference` is skipped, however often it occurs.
/// Matches are returned in the order they appear in `universe`. Comparison
/// is case-sensitive.
pub fn find_close_names(reference: &str, universe: &[String], max_distance: usize) -> Vec<String> {
    let reference_len = reference.chars().count();

    universe
        .iter()
        .filter(|name| is_close(reference, reference_len, name, max_distance))
        .cloned()
        .collect()
}

/// Parallel version of [`find_close_names`].
///
/// Comparisons are spread over the rayon thread pool; the output is
/// identical to the sequential version, including order.
pub fn find_close_names_par(
    reference: &str,
    universe: &[String],
    max_distance: usize,
) -> Vec<String> {
    let reference_len = reference.chars().count();

    universe
        .par_iter()
        .filter(|name| is_close(reference, reference_len, name, max_distance))
        .cloned()
        .collect()
}

/// Match every reference name against `universe`.
///
/// Each distinct reference gets an entry, even when nothing is close to it.
pub fn build_candidate_map(
    references: &[String],
    universe: &[String],
    max_distance: usize,
    parallel: bool,
) -> CandidateMap {
    build_candidate_map_with(references, universe, max_distance, parallel, |_, _| {})
}

/// Like [`build_candidate_map`], calling `on_reference` after each reference
/// has been matched.
pub fn build_candidate_map_with<F>(
    references: &[String],
    universe: &[String],
    max_distance: usize,
    parallel: bool,
    mut on_reference: F,
) -> CandidateMap
where
    F: FnMut(&str, &[String]),
{
    let mut candidates = CandidateMap::new();

    for reference in references {
        if candidates.contains_key(reference) {
            continue;
        }

        let close = if parallel {
            find_close_names_par(reference, universe, max_distance)
        } else {
            find_close_names(reference, universe, max_distance)
        };

        if !close.is_empty() {
            debug!("{}: {} close name(s)", reference, close.len());
        }
        on_reference(reference, &close);
        candidates.insert(reference.clone(), close);
    }

    candidates
}
