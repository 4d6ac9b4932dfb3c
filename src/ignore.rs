//! `.bumpignore` — user-configurable rules excluding paths from the
//! version-file walk.
//!
//! Line-oriented format:
//! - Blank lines are ignored
//! - Lines starting with `#` are comments
//! - A leading `/` makes the rule anchored: it matches only the exact
//!   root-relative path (`/vendor` ignores `vendor` but not `foo/vendor`)
//! - Any other line is unanchored: it matches when any path segment equals
//!   the pattern, at any depth (`testdata` ignores `foo/bar/testdata`)
//!
//! Matching is exact segment equality, not glob expansion. A missing rule
//! file is treated as an empty rule set.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::Result;

/// A single parsed ignore rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreRule {
    pub pattern: String,
    pub anchored: bool,
}

/// A parsed set of ignore rules.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    rules: Vec<IgnoreRule>,
}

impl IgnoreRules {
    /// Load rules from `path`. A missing file yields an empty rule set;
    /// any other read failure is an error.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Self::parse(&content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse rule-file content into a rule set.
    pub fn parse(content: &str) -> Self {
        let mut rules = Vec::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if let Some(rest) = trimmed.strip_prefix('/') {
                rules.push(IgnoreRule {
                    pattern: rest.trim_end_matches('/').to_string(),
                    anchored: true,
                });
            } else {
                rules.push(IgnoreRule {
                    pattern: trimmed.trim_end_matches('/').to_string(),
                    anchored: false,
                });
            }
        }

        IgnoreRules { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether `rel_path` (relative to the working tree root) is excluded.
    ///
    /// Anchored rules compare against the whole path; unanchored rules
    /// compare against each segment. Because the traversal calls this for
    /// every directory it visits, an unanchored match on a directory name
    /// prunes the entire subtree.
    pub fn is_ignored(&self, rel_path: &Path) -> bool {
        if self.rules.is_empty() {
            return false;
        }

        let segments: Vec<String> = rel_path
            .iter()
            .map(|part| part.to_string_lossy().into_owned())
            .collect();
        let full = segments.join("/");

        self.rules.iter().any(|rule| {
            if rule.anchored {
                full == rule.pattern
            } else {
                segments.iter().any(|segment| *segment == rule.pattern)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_and_comments() {
        let rules = IgnoreRules::parse("# comment\n\n   \n");
        assert!(rules.is_empty());
    }

    #[test]
    fn test_anchored_matches_exact_path_only() {
        let rules = IgnoreRules::parse("/vendor\n");
        assert!(rules.is_ignored(Path::new("vendor")));
        assert!(!rules.is_ignored(Path::new("foo/vendor")));
        assert!(!rules.is_ignored(Path::new("vendored")));
    }

    #[test]
    fn test_anchored_nested_path() {
        let rules = IgnoreRules::parse("/release/.version\n");
        assert!(rules.is_ignored(Path::new("release/.version")));
        assert!(!rules.is_ignored(Path::new(".version")));
        assert!(!rules.is_ignored(Path::new("foo/release/.version")));
    }

    #[test]
    fn test_unanchored_matches_any_depth() {
        let rules = IgnoreRules::parse("testdata\n");
        assert!(rules.is_ignored(Path::new("testdata")));
        assert!(rules.is_ignored(Path::new("foo/bar/testdata")));
        assert!(rules.is_ignored(Path::new("foo/testdata/baz")));
        assert!(!rules.is_ignored(Path::new("foo/bar")));
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let rules = IgnoreRules::parse("dist/\n/build/\n");
        assert!(rules.is_ignored(Path::new("foo/dist")));
        assert!(rules.is_ignored(Path::new("build")));
        assert!(!rules.is_ignored(Path::new("foo/build")));
    }

    #[test]
    fn test_segment_match_is_exact() {
        let rules = IgnoreRules::parse("test\n");
        assert!(rules.is_ignored(Path::new("foo/test")));
        assert!(!rules.is_ignored(Path::new("foo/testdata")));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let rules = IgnoreRules::load(Path::new("/nonexistent/path/.bumpignore")).unwrap();
        assert!(rules.is_empty());
        assert!(!rules.is_ignored(Path::new("anything")));
    }
}
