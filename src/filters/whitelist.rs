//! Whitelist of known-legitimate package names.
//!
//! Some names are legitimately close to a popular package (`pytest-mock` vs
//! `pytest-mocks`, forks, official companions). Listing them in a whitelist
//! file keeps them out of the final report.

use crate::types::{CandidateMap, LineEndings, Result, SquatError};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, trace};

/// Set of package names that are never reported as typosquats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    names: HashSet<String>,
}

impl Whitelist {
    /// Parse whitelist content, one name per line.
    ///
    /// Only the line terminator is stripped. Blank lines become the empty
    /// name, and any other whitespace is part of the name. With
    /// [`LineEndings::Universal`], `\r\n`, `\n` and a lone `\r` all end a line.
    pub fn parse(content: &str, line_endings: LineEndings) -> Self {
        match line_endings {
            LineEndings::Lf => Self::parse_lf(content),
            LineEndings::Universal => {
                Self::parse_lf(&content.replace("\r\n", "\n").replace('\r', "\n"))
            }
        }
    }

    fn parse_lf(content: &str) -> Self {
        let names = content
            .split_inclusive('\n')
            .map(|line| line.strip_suffix('\n').unwrap_or(line))
            .map(str::to_string)
            .collect();

        Self { names }
    }

    /// Copy of the whitelist with every name lowercased.
    pub fn to_lowercase(&self) -> Self {
        self.names.iter().map(|name| name.to_lowercase()).collect()
    }

    /// Number of distinct names in the whitelist.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the whitelist has no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `name` is whitelisted (exact match).
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Drop whitelisted names from every candidate list.
    ///
    /// Keys are left untouched and surviving candidates keep their order.
    /// Returns the number of candidates removed.
    pub fn retain_unlisted(&self, candidates: &mut CandidateMap) -> usize {
        let mut removed = 0;

        for (reference, names) in candidates.iter_mut() {
            let before = names.len();
            names.retain(|name| {
                let listed = self.contains(name);
                if listed {
                    trace!("Whitelisted candidate {} for {}", name, reference);
                }
                !listed
            });
            removed += before - names.len();
        }

        removed
    }
}

impl<S: Into<String>> FromIterator<S> for Whitelist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Load a whitelist file.
///
/// A missing or unreadable file is an error. An empty whitelist is never
/// substituted, since that would silently disable filtering.
pub fn load_whitelist(path: &Path, line_endings: LineEndings) -> Result<Whitelist> {
    let content = std::fs::read_to_string(path).map_err(|source| SquatError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let whitelist = Whitelist::parse(&content, line_endings);
    debug!("Loaded {} whitelisted names from {:?}", whitelist.len(), path);

    Ok(whitelist)
}

/// Remove candidates listed in the whitelist file at `path`.
///
/// Returns the number of candidates removed.
pub fn apply_whitelist(candidates: &mut CandidateMap, path: &Path) -> Result<usize> {
    let whitelist = load_whitelist(path, LineEndings::default())?;
    Ok(whitelist.retain_unlisted(candidates))
}
