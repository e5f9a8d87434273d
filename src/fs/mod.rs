//! Filesystem access used by navigation and preview.
//!
//! Everything the explorer knows about the disk goes through the
//! [`FileSystem`] trait, so the navigation logic never touches `std::fs`
//! directly. [`LocalFs`] is the real implementation.

pub mod entry;
pub mod local;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::Result;

pub use entry::{sort_entries, DirectoryEntry};
pub use local::LocalFs;

/// Metadata returned by [`FileSystem::stat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub is_dir: bool,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

/// Read-only view of a filesystem.
///
/// Implementations must be shareable across threads: previews are computed
/// on blocking worker threads while the event loop keeps running.
pub trait FileSystem: Send + Sync {
    /// List the immediate children of `path`, in no particular order.
    ///
    /// Children whose metadata cannot be read are skipped rather than
    /// failing the whole listing.
    fn list_children(&self, path: &Path) -> Result<Vec<DirectoryEntry>>;

    /// Stat a path, following symlinks.
    fn stat(&self, path: &Path) -> Result<FileStat>;

    /// Read the entire content of a file.
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;

    /// Resolve the directory the process was started in.
    fn working_directory(&self) -> Result<PathBuf>;

    /// Count the direct children of `path`.
    fn count_children(&self, path: &Path) -> Result<usize> {
        self.list_children(path).map(|children| children.len())
    }

    /// Parent directory of `path`. The root is its own parent, and a bare
    /// relative name resolves to `"."`.
    fn parent_of(&self, path: &Path) -> PathBuf {
        match path.parent() {
            Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
            Some(parent) => parent.to_path_buf(),
            None => path.to_path_buf(),
        }
    }

    /// Join a child name onto a directory path.
    fn join(&self, path: &Path, name: &OsStr) -> PathBuf {
        path.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_of_nested_path() {
        let fs = LocalFs;
        assert_eq!(fs.parent_of(Path::new("/a/b")), PathBuf::from("/a"));
    }

    #[test]
    fn parent_of_root_is_root() {
        let fs = LocalFs;
        assert_eq!(fs.parent_of(Path::new("/")), PathBuf::from("/"));
    }

    #[test]
    fn parent_of_relative_name_is_dot() {
        let fs = LocalFs;
        assert_eq!(fs.parent_of(Path::new("src")), PathBuf::from("."));
        assert_eq!(fs.parent_of(Path::new(".")), PathBuf::from("."));
    }

    #[test]
    fn join_appends_name() {
        let fs = LocalFs;
        assert_eq!(
            fs.join(Path::new("/a"), OsStr::new("notes.txt")),
            PathBuf::from("/a/notes.txt")
        );
    }
}
