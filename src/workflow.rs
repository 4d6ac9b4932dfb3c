//! Top-level bump sequence: precondition checks, version resolution, file
//! updates, and the commit/tag pair.
//!
//! Every precondition — clean tree, resolvable current version, valid
//! `.version` contents, free tag name — is verified before the first
//! write, so a failure at any step leaves the repository untouched.

use std::io::Write;
use std::path::Path;

use crate::config::{Config, Settings};
use crate::error::{BumpError, Result};
use crate::git::GitRepo;
use crate::ignore::IgnoreRules;
use crate::updater;
use crate::version::Version;

/// Result of a completed bump run.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    /// The version that was written and tagged.
    pub version: Version,

    /// Hash reported for the tag: the tag object id for real runs, the
    /// current HEAD hash for dry runs.
    pub tag_ref: String,

    /// Number of `.version` files covered by the run.
    pub files_updated: usize,

    /// Whether a commit was created.
    pub committed: bool,

    /// Whether the tag was created (always false for dry runs).
    pub tagged: bool,
}

/// Run the whole bump sequence against the repository containing `path`.
///
/// Progress lines for individual file updates are written to `out`; the
/// sink receives identical output for dry and real runs up to the first
/// mutation.
pub fn run(path: &Path, config: &Config, out: &mut dyn Write) -> Result<BumpOutcome> {
    let repo = GitRepo::discover(path)?;

    if !config.force && !repo.is_clean()? {
        return Err(BumpError::precondition(
            "working tree has uncommitted changes (use --force to bypass)",
        ));
    }

    let next = match config.version.as_deref() {
        Some(explicit) => Version::parse(explicit)?,
        None => Version::parse(&repo.latest_version_tag()?)?.bump(config.bump)?,
    };

    // Tag-name availability is a precondition, not a late failure: checking
    // here keeps a name collision from leaving a version commit behind.
    let tag_name = next.to_string();
    if repo.tag_exists(&tag_name)? {
        return Err(BumpError::tag(format!("tag '{}' already exists", tag_name)));
    }

    let workdir = repo.workdir()?.to_path_buf();
    let settings = Settings::load(&workdir)?;
    let rules = IgnoreRules::load(&workdir.join(&settings.ignore_file))?;

    let plan = updater::plan_updates(&workdir, &rules, next)?;
    let committed = updater::apply_updates(&repo, &plan, config, &settings, out)?;

    let (tag_ref, tagged) = if config.dry_run {
        (repo.head_hash()?, false)
    } else {
        let oid = repo.create_annotated_tag(&tag_name, &settings.tag_message)?;
        (oid.to_string(), true)
    };

    Ok(BumpOutcome {
        version: next,
        tag_ref,
        files_updated: plan.files.len(),
        committed,
        tagged,
    })
}
