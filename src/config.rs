use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{BumpError, Result};
use crate::version::{BumpKind, Version};

/// Per-invocation options resolved from command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Explicit target version; skips tag resolution when set.
    pub version: Option<String>,

    /// Which component to increment when no explicit version is given.
    pub bump: BumpKind,

    /// Announce everything but write nothing.
    pub dry_run: bool,

    /// Bypass the clean-working-tree check.
    pub force: bool,
}

impl Config {
    /// Build a config from raw flag values, enforcing mutual exclusivity.
    ///
    /// `--version` excludes every increment flag, and at most one increment
    /// flag may be set. When none is set, the default action is a patch
    /// bump.
    pub fn from_flags(
        version: Option<String>,
        patch: bool,
        minor: bool,
        major: bool,
        dry_run: bool,
        force: bool,
    ) -> Result<Self> {
        if version.is_some() && (patch || minor || major) {
            return Err(BumpError::config(
                "cannot set --version and an increment flag at the same time",
            ));
        }

        let increment_flags = [patch, minor, major].iter().filter(|set| **set).count();
        if increment_flags > 1 {
            return Err(BumpError::config(
                "cannot set more than one increment flag at the same time",
            ));
        }

        let bump = if major {
            BumpKind::Major
        } else if minor {
            BumpKind::Minor
        } else {
            BumpKind::Patch
        };

        Ok(Config {
            version,
            bump,
            dry_run,
            force,
        })
    }
}

fn default_commit_message() -> String {
    "bump version to {version}".to_string()
}

fn default_tag_message() -> String {
    "tag created by bump".to_string()
}

fn default_ignore_file() -> String {
    ".bumpignore".to_string()
}

/// File-based settings for message templates and the ignore-file name.
///
/// Loaded from `bump.toml`; every key is optional.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Commit message template; `{version}` is replaced with the target.
    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    /// Message attached to the annotated tag.
    #[serde(default = "default_tag_message")]
    pub tag_message: String,

    /// Name of the ignore-rule file at the repository root.
    #[serde(default = "default_ignore_file")]
    pub ignore_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            commit_message: default_commit_message(),
            tag_message: default_tag_message(),
            ignore_file: default_ignore_file(),
        }
    }
}

impl Settings {
    /// Load settings, in order: `bump.toml` at the repository root,
    /// `bump.toml` in the user config directory, built-in defaults.
    pub fn load(root: &Path) -> Result<Self> {
        let local = root.join("bump.toml");
        let content = if local.exists() {
            fs::read_to_string(&local)?
        } else if let Some(config_dir) = dirs::config_dir() {
            let user = config_dir.join("bump.toml");
            if user.exists() {
                fs::read_to_string(user)?
            } else {
                return Ok(Settings::default());
            }
        } else {
            return Ok(Settings::default());
        };

        toml::from_str(&content).map_err(|e| BumpError::config(format!("invalid bump.toml: {}", e)))
    }

    /// Render the commit message for a target version.
    pub fn commit_message_for(&self, version: &Version) -> String {
        self.commit_message.replace("{version}", &version.to_string())
    }
}
