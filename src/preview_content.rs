//! Preview engine: classify a path and produce what the preview pane shows.
//!
//! The engine is read-only. It stats the path, summarises directories,
//! refuses files above the size limit without reading them, and otherwise
//! reads the file and decides between a binary notice and literal text.

use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::format::format_size;
use crate::fs::FileSystem;

/// Default max file size (bytes) that will be read for preview (100 KiB).
pub const DEFAULT_MAX_PREVIEW_BYTES: u64 = 100 * 1024;

/// Outcome of a single preview request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewResult {
    DirectorySummary { path: PathBuf, item_count: usize },
    TooLarge { size: u64 },
    Binary { path: PathBuf, size: u64 },
    Text { content: String },
    Error { message: String },
}

impl PreviewResult {
    /// Text shown in the preview pane for this result.
    pub fn display_text(&self) -> String {
        match self {
            PreviewResult::DirectorySummary { path, item_count } => format!(
                "Directory: {}\nContains {} items",
                path.display(),
                item_count
            ),
            PreviewResult::TooLarge { size } => {
                format!("File is too large to preview ({})", format_size(*size))
            }
            PreviewResult::Binary { path, size } => format!(
                "Binary file: {}\nSize: {}",
                path.display(),
                format_size(*size)
            ),
            PreviewResult::Text { content } => content.clone(),
            PreviewResult::Error { message } => message.clone(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PreviewResult::Error { .. })
    }

    /// Text previews are shown as-is; every other variant is a notice.
    pub fn is_text(&self) -> bool {
        matches!(self, PreviewResult::Text { .. })
    }
}

impl From<&AppError> for PreviewResult {
    fn from(err: &AppError) -> Self {
        let message = match err {
            AppError::FileUnreadable { .. } => format!("Error reading file: {}", err),
            _ => format!("Error: {}", err),
        };
        PreviewResult::Error { message }
    }
}

/// Build the preview for `path`. Files larger than `max_bytes` are never read.
pub fn preview(fs: &dyn FileSystem, path: &Path, max_bytes: u64) -> PreviewResult {
    let stat = match fs.stat(path) {
        Ok(stat) => stat,
        Err(e) => return PreviewResult::from(&e),
    };

    if stat.is_dir {
        return PreviewResult::DirectorySummary {
            path: path.to_path_buf(),
            item_count: fs.count_children(path).unwrap_or(0),
        };
    }

    if stat.size > max_bytes {
        return PreviewResult::TooLarge { size: stat.size };
    }

    let content = match fs.read_file(path) {
        Ok(bytes) => bytes,
        Err(e) => return PreviewResult::from(&e),
    };

    if is_binary(&content) {
        return PreviewResult::Binary {
            path: path.to_path_buf(),
            size: stat.size,
        };
    }

    PreviewResult::Text {
        content: String::from_utf8_lossy(&content).into_owned(),
    }
}

/// Heuristic binary check: any NUL or C0 control byte other than tab,
/// line feed and carriage return.
pub fn is_binary(data: &[u8]) -> bool {
    data.iter()
        .any(|&b| b < 0x20 && !matches!(b, b'\t' | b'\n' | b'\r'))
}
