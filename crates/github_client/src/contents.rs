//! Repository contents types.
//!
//! This module contains the types returned by the host's contents API when
//! listing a directory of a repository.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "contents_tests.rs"]
mod tests;

/// A single entry in a repository directory listing.
///
/// Represents files, directories, symlinks and submodules returned by the
/// contents API. Only files carry a download URL. Unrecognised kinds
/// deserialize as [`EntryType::Other`].
///
/// # Examples
///
/// ```rust
/// use github_client::{EntryType, TreeEntry};
///
/// let entry = TreeEntry {
///     name: "ci.yml".to_string(),
///     path: ".github/workflows/ci.yml".to_string(),
///     entry_type: EntryType::File,
///     sha: "abc123".to_string(),
///     size: 512,
///     download_url: Some("https://raw.githubusercontent.com/o/r/main/.github/workflows/ci.yml".to_string()),
/// };
///
/// assert!(entry.is_file());
/// assert!(!entry.is_dir());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    /// Entry name (e.g., "src", "config.yml")
    pub name: String,

    /// Slash-joined path from the repository root (e.g., "src/config.yml")
    pub path: String,

    /// Entry type (file, directory, symlink, submodule)
    #[serde(rename = "type")]
    pub entry_type: EntryType,

    /// Git SHA of the entry
    #[serde(default)]
    pub sha: String,

    /// Size in bytes (0 for directories)
    #[serde(default)]
    pub size: u64,

    /// Download URL for files (None for directories)
    #[serde(default)]
    pub download_url: Option<String>,
}

impl TreeEntry {
    /// Returns `true` if the entry is a regular file.
    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }

    /// Returns `true` if the entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Dir
    }
}

/// Type of entry in a repository directory.
///
/// Maps to the `type` field in the contents API response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Regular file
    File,

    /// Directory (can contain other entries)
    Dir,

    /// Symbolic link
    Symlink,

    /// Git submodule reference
    Submodule,

    /// Any entry kind the host adds later
    #[serde(other)]
    Other,
}
