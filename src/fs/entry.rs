use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};
use std::time::SystemTime;

/// One row of the directory listing.
///
/// A snapshot taken when the directory was listed; it is not refreshed if
/// the file changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Display name. Lossy for names that are not valid UTF-8, with control
    /// characters shown as `?`.
    pub name: String,
    /// The name exactly as the filesystem reported it.
    pub file_name: OsString,
    pub is_dir: bool,
    /// Size in bytes. Only meaningful for files.
    pub size: u64,
    pub modified: Option<SystemTime>,
}

impl DirectoryEntry {
    /// Name of the synthetic entry that leads to the parent directory.
    pub const PARENT_NAME: &'static str = "..";

    pub fn new(
        file_name: impl Into<OsString>,
        is_dir: bool,
        size: u64,
        modified: Option<SystemTime>,
    ) -> Self {
        let file_name = file_name.into();
        Self {
            name: file_name
                .to_string_lossy()
                .chars()
                .map(|c| if c.is_control() { '?' } else { c })
                .collect(),
            file_name,
            is_dir,
            size,
            modified,
        }
    }

    /// The synthetic `".."` row placed at the top of every listing.
    pub fn parent() -> Self {
        Self::new(Self::PARENT_NAME, true, 0, None)
    }

    /// Name to join onto the containing directory.
    pub fn path_name(&self) -> &OsStr {
        &self.file_name
    }

    pub fn is_parent(&self) -> bool {
        self.name == Self::PARENT_NAME
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.') && !self.is_parent()
    }
}

/// Sort entries by name (case-insensitive), optionally with directories first.
pub fn sort_entries(entries: &mut [DirectoryEntry], dirs_first: bool) {
    entries.sort_by(|a, b| {
        let by_kind = if dirs_first {
            b.is_dir.cmp(&a.is_dir)
        } else {
            Ordering::Equal
        };
        by_kind
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
    });
}
