use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{DirectoryEntry, FileStat, FileSystem};
use crate::error::{AppError, Result};

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn list_children(&self, path: &Path) -> Result<Vec<DirectoryEntry>> {
        let read_dir = fs::read_dir(path).map_err(|e| AppError::path_unreadable(path, e))?;

        Ok(read_dir
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| listed_entry(entry.file_name(), entry.metadata()))
            .collect())
    }

    fn stat(&self, path: &Path) -> Result<FileStat> {
        let metadata = fs::metadata(path).map_err(|e| AppError::path_unreadable(path, e))?;
        Ok(FileStat {
            is_dir: metadata.is_dir(),
            size: metadata.len(),
            modified: metadata.modified().ok(),
        })
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| AppError::file_unreadable(path, e))
    }

    fn working_directory(&self) -> Result<PathBuf> {
        std::env::current_dir().map_err(AppError::WorkingDirectoryUnavailable)
    }

    fn count_children(&self, path: &Path) -> Result<usize> {
        fs::read_dir(path)
            .map(|entries| entries.count())
            .map_err(|e| AppError::path_unreadable(path, e))
    }
}

/// Build a listing row, or skip the child when its metadata is unavailable.
fn listed_entry(
    file_name: OsString,
    metadata: io::Result<fs::Metadata>,
) -> Option<DirectoryEntry> {
    let metadata = metadata.ok()?;
    Some(DirectoryEntry::new(
        file_name,
        metadata.is_dir(),
        metadata.len(),
        metadata.modified().ok(),
    ))
}
