use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{BumpError, Result};

/// Semantic version as stored in `.version` files and tag names
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Which component of the version an invocation increments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    None,
    Patch,
    Minor,
    Major,
}

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^v(\d+)\.(\d+)\.(\d+)$").expect("pattern compiles"))
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string of the exact form `vMAJOR.MINOR.PATCH`.
    ///
    /// The component count is checked first, then the numeric pattern, so
    /// `v1.0` and `v1.0.0.0` report a format error while `va.b.c` reports
    /// a parse error.
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split('.').collect();
        if parts.len() != 3 {
            return Err(BumpError::version(format!(
                "invalid version format '{}': expected vMAJOR.MINOR.PATCH",
                input
            )));
        }

        let captures = version_pattern()
            .captures(input)
            .ok_or_else(|| BumpError::version(format!("failed to parse version '{}'", input)))?;

        let major = captures[1]
            .parse::<u64>()
            .map_err(|_| BumpError::version(format!("invalid major component in '{}'", input)))?;
        let minor = captures[2]
            .parse::<u64>()
            .map_err(|_| BumpError::version(format!("invalid minor component in '{}'", input)))?;
        let patch = captures[3]
            .parse::<u64>()
            .map_err(|_| BumpError::version(format!("invalid patch component in '{}'", input)))?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Produce the next version for the given bump kind.
    ///
    /// Lower components reset to 0: minor bumps clear patch, major bumps
    /// clear minor and patch. `BumpKind::None` is rejected.
    pub fn bump(self, kind: BumpKind) -> Result<Self> {
        match kind {
            BumpKind::Patch => Ok(Version {
                patch: self.patch + 1,
                ..self
            }),
            BumpKind::Minor => Ok(Version {
                minor: self.minor + 1,
                patch: 0,
                ..self
            }),
            BumpKind::Major => Ok(Version::new(self.major + 1, 0, 0)),
            BumpKind::None => Err(BumpError::config("no bump action specified")),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

fn parse_semver(tag: &str) -> Option<semver::Version> {
    tag.strip_prefix('v')
        .and_then(|rest| semver::Version::parse(rest).ok())
}

/// Whether `text` is a syntactically valid version tag: a leading `v`
/// followed by a full semantic version. Pre-release and build metadata are
/// accepted (`v1.2.3-rc1+build5`).
pub fn is_valid_version(text: &str) -> bool {
    parse_semver(text).is_some()
}

/// Pick the highest semantic-version tag out of `tags`.
///
/// Non-version tags are filtered out; the rest are ordered by semver
/// precedence (pre-releases sort below the corresponding release) and the
/// original name of the highest one is returned.
pub fn highest_version_tag(tags: &[String]) -> Result<String> {
    tags.iter()
        .filter_map(|name| parse_semver(name).map(|parsed| (parsed, name.clone())))
        .max_by(|a, b| a.0.cmp(&b.0))
        .map(|(_, name)| name)
        .ok_or_else(|| BumpError::resolve("no version tags found in the repository"))
}
