use std::path::Path;

use git2::{Oid, Repository, StatusOptions};

use crate::error::{BumpError, Result};
use crate::version;

/// Wrapper around git2::Repository for the repository operations bump
/// performs: cleanliness check, tag lookup, staging, commit, and annotated
/// tag creation.
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Discover the repository containing `path` (or one of its parents).
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path)
            .map_err(|e| BumpError::precondition(format!("not in a git repository: {}", e)))?;
        Ok(GitRepo { repo })
    }

    /// Root of the working tree.
    pub fn workdir(&self) -> Result<&Path> {
        self.repo
            .workdir()
            .ok_or_else(|| BumpError::precondition("repository has no working tree"))
    }

    /// Whether the working tree has no uncommitted changes.
    ///
    /// Untracked files count as dirty; ignored files and submodules do not.
    pub fn is_clean(&self) -> Result<bool> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(true)
            .recurse_untracked_dirs(true)
            .exclude_submodules(true);

        let statuses = self.repo.statuses(Some(&mut options))?;
        Ok(statuses.is_empty())
    }

    /// All tag names in the repository.
    pub fn tag_names(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;
        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    /// The highest existing semantic-version tag.
    ///
    /// # Returns
    /// * `Ok(name)` - Name of the highest version tag
    /// * `Err` - If no tag is a valid version
    pub fn latest_version_tag(&self) -> Result<String> {
        version::highest_version_tag(&self.tag_names()?)
    }

    /// Whether a tag reference with this name already exists.
    pub fn tag_exists(&self, name: &str) -> Result<bool> {
        let reference_name = format!("refs/tags/{}", name);
        match self.repo.find_reference(&reference_name) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Stage a single path, relative to the working tree root.
    pub fn stage(&self, rel_path: &Path) -> Result<()> {
        let mut index = self.repo.index()?;
        index.add_path(rel_path)?;
        index.write()?;
        Ok(())
    }

    /// Commit the staged index to HEAD.
    ///
    /// The current HEAD commit (if any) becomes the sole parent, so this
    /// appends to the current branch the same way `git commit` does.
    ///
    /// # Returns
    /// * `Ok(Oid)` - Id of the new commit
    /// * `Err` - If the index cannot be written or the commit fails
    pub fn commit_staged(&self, message: &str) -> Result<Oid> {
        let mut index = self.repo.index()?;
        let tree_oid = index.write_tree()?;
        let tree = self.repo.find_tree(tree_oid)?;

        let signature = self.repo.signature()?;

        let mut parents = Vec::new();
        if let Ok(head) = self.repo.head() {
            parents.push(head.peel_to_commit()?);
        }
        let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

        let oid = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parent_refs,
        )?;
        Ok(oid)
    }

    /// Create an annotated tag on the current HEAD commit.
    ///
    /// # Returns
    /// * `Ok(Oid)` - Id of the tag object
    /// * `Err` - If the tag name is taken or HEAD cannot be resolved
    pub fn create_annotated_tag(&self, name: &str, message: &str) -> Result<Oid> {
        let head = self.repo.head()?.peel_to_commit()?;
        let signature = self.repo.signature()?;
        let oid = self
            .repo
            .tag(name, head.as_object(), &signature, message, false)?;
        Ok(oid)
    }

    /// Full hex hash of the current HEAD commit.
    pub fn head_hash(&self) -> Result<String> {
        let head = self.repo.head()?;
        let oid = head
            .target()
            .ok_or_else(|| BumpError::precondition("HEAD is detached or invalid"))?;
        Ok(oid.to_string())
    }
}
