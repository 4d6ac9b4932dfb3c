//! Version-file updates, split into a read-only plan phase and a mutating
//! apply phase so every validation failure happens before the first write.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::{Config, Settings};
use crate::error::{BumpError, Result};
use crate::git::GitRepo;
use crate::ignore::IgnoreRules;
use crate::version::{self, Version};

/// Name of the files holding the project version.
pub const VERSION_FILE_NAME: &str = ".version";

/// A single pending `.version` rewrite, relative to the working tree root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpdate {
    pub path: PathBuf,
}

/// The set of file changes computed before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlan {
    pub version: Version,
    pub files: Vec<FileUpdate>,
}

/// Walk the working tree and collect every `.version` file to rewrite.
///
/// The walk is deterministic (entries sorted by file name), never enters
/// `.git`, and skips ignored directories without descending into them.
/// Existing file contents are validated here: a non-empty file that is not
/// a valid version string fails the whole plan, naming the path and the
/// offending content.
pub fn plan_updates(workdir: &Path, rules: &IgnoreRules, version: Version) -> Result<UpdatePlan> {
    let mut files = Vec::new();

    let walker = WalkDir::new(workdir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.file_name() == ".git" {
                return false;
            }
            match entry.path().strip_prefix(workdir) {
                // The root itself has an empty relative path; always keep it.
                Ok(rel) if rel.as_os_str().is_empty() => true,
                Ok(rel) => !rules.is_ignored(rel),
                Err(_) => true,
            }
        });

    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() || entry.file_name() != VERSION_FILE_NAME {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(workdir)
            .unwrap_or_else(|_| entry.path())
            .to_path_buf();

        let content = fs::read_to_string(entry.path())?;
        let current = content.trim();
        if !current.is_empty() && !version::is_valid_version(current) {
            return Err(BumpError::version(format!(
                "invalid version in file {}: '{}'",
                rel.display(),
                current
            )));
        }

        files.push(FileUpdate { path: rel });
    }

    Ok(UpdatePlan { version, files })
}

/// Apply a computed plan: announce each file, write it, stage it, then make
/// one commit covering everything.
///
/// The announcement line is emitted before the write so dry runs and real
/// runs produce identical output up to the first mutation. In dry-run mode
/// nothing is written, staged, or committed. With zero planned files no
/// commit is made.
///
/// # Returns
/// * `Ok(true)` - A commit was created
/// * `Ok(false)` - Nothing to commit (dry run or empty plan)
pub fn apply_updates(
    repo: &GitRepo,
    plan: &UpdatePlan,
    config: &Config,
    settings: &Settings,
    out: &mut dyn Write,
) -> Result<bool> {
    let workdir = repo.workdir()?.to_path_buf();

    for update in &plan.files {
        writeln!(
            out,
            "Updating version in file {} to {}",
            update.path.display(),
            plan.version
        )?;

        if config.dry_run {
            continue;
        }

        fs::write(workdir.join(&update.path), plan.version.to_string())?;
        repo.stage(&update.path)?;
    }

    if config.dry_run || plan.files.is_empty() {
        return Ok(false);
    }

    repo.commit_staged(&settings.commit_message_for(&plan.version))?;
    Ok(true)
}
