//! Depth-first search for the first YAML file in a repository.
//!
//! The search visits directory entries in the order the host returns them and
//! fully explores each subdirectory before moving on to its next sibling. The
//! first file whose name ends in [`YAML_SUFFIX`] wins; nothing after it is
//! listed.
//!
//! The host exposes a tree, so there is no depth limit and no cycle detection.
//! Symlinks and submodules are neither matched nor descended into.

use github_client::{Error as HostError, RepositoryHost, TreeEntry};
use tracing::{debug, instrument};

#[cfg(test)]
#[path = "yaml_locator_tests.rs"]
mod tests;

/// File name suffix of the configuration files the locator looks for.
pub const YAML_SUFFIX: &str = ".yml";

/// Returns `true` if `entry` is a file whose name ends in [`YAML_SUFFIX`].
///
/// The comparison is case-sensitive.
pub fn is_yaml_file(entry: &TreeEntry) -> bool {
    entry.is_file() && entry.name.ends_with(YAML_SUFFIX)
}

/// Finds the first YAML file in a repository tree.
pub struct YamlLocator<'a> {
    host: &'a dyn RepositoryHost,
}

impl<'a> YamlLocator<'a> {
    pub fn new(host: &'a dyn RepositoryHost) -> Self {
        Self { host }
    }

    /// Searches the tree rooted at `start_path` (`""` for the repository root).
    ///
    /// # Returns
    ///
    /// * `Ok(Some(entry))` - The first YAML file in depth-first, host order
    /// * `Ok(None)` - The tree contains no YAML file
    ///
    /// # Errors
    ///
    /// A failed directory listing at any depth fails the whole search; the
    /// subtree is not skipped.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo, start_path = %start_path))]
    pub async fn find_yaml(
        &self,
        owner: &str,
        repo: &str,
        start_path: &str,
    ) -> Result<Option<TreeEntry>, HostError> {
        let entries = self.host.list_directory(owner, repo, start_path).await?;
        self.find_yaml_in_listing(owner, repo, entries).await
    }

    /// Continues the search from a directory listing the caller already holds.
    pub async fn find_yaml_in_listing(
        &self,
        owner: &str,
        repo: &str,
        entries: Vec<TreeEntry>,
    ) -> Result<Option<TreeEntry>, HostError> {
        // One iterator per open directory; the last one is the directory being scanned.
        let mut pending = vec![entries.into_iter()];

        while let Some(level) = pending.last_mut() {
            let Some(entry) = level.next() else {
                pending.pop();
                continue;
            };

            if is_yaml_file(&entry) {
                debug!(path = %entry.path, "Found YAML file");
                return Ok(Some(entry));
            }

            if entry.is_dir() {
                let children = self.host.list_directory(owner, repo, &entry.path).await?;
                pending.push(children.into_iter());
            }
        }

        debug!("No YAML file found");
        Ok(None)
    }
}
