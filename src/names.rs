//! Loading package name lists from local files.

use crate::types::{Result, SquatError};
use std::path::Path;
use tracing::debug;

/// Parse a name list: one name per line, surrounding whitespace trimmed,
/// blank lines and `#` comments skipped. Order and duplicates are kept.
pub fn parse_names(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Load a name list file.
pub fn load_names(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| SquatError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let names = parse_names(&content);
    debug!("Loaded {} names from {:?}", names.len(), path);

    Ok(names)
}

/// Lowercase every name, for registries that compare names case-insensitively.
pub fn lowercase_all(names: &[String]) -> Vec<String> {
    names.iter().map(|name| name.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_names() {
        let content = "# top packages\nrequests\n\n  numpy  \r\nrequests\n";
        assert_eq!(parse_names(content), vec!["requests", "numpy", "requests"]);
    }

    #[test]
    fn test_load_names() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lodash").unwrap();
        writeln!(file, "express").unwrap();

        assert_eq!(load_names(file.path()).unwrap(), vec!["lodash", "express"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_names(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, SquatError::ResourceNotFound { .. }));
    }

    #[test]
    fn test_lowercase_all() {
        let names = vec!["Django".to_string(), "PyYAML".to_string()];
        assert_eq!(lowercase_all(&names), vec!["django", "pyyaml"]);
    }
}
