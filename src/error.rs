use std::path::PathBuf;

use thiserror::Error;

/// Application-wide result type alias.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// A directory could not be listed or a path could not be stat'ed.
    #[error("{}: {source}", path.display())]
    PathUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file's content could not be read.
    #[error("{}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The process working directory could not be resolved at startup.
    #[error("Working directory unavailable: {0}")]
    WorkingDirectoryUnavailable(#[source] std::io::Error),

    /// I/O errors outside of the filesystem collaborator (terminal, stdout).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal initialization or rendering errors.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl AppError {
    pub fn path_unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::PathUnreadable {
            path: path.into(),
            source,
        }
    }

    pub fn file_unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::FileUnreadable {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn io_error_conversion() {
        let io_err = Error::new(ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn terminal_error_display() {
        let err = AppError::Terminal("failed to enter raw mode".into());
        assert_eq!(err.to_string(), "Terminal error: failed to enter raw mode");
    }

    #[test]
    fn path_unreadable_display_includes_path_and_cause() {
        let err = AppError::path_unreadable(
            "/gone",
            Error::new(ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(err.to_string(), "/gone: No such file or directory");
    }

    #[test]
    fn file_unreadable_keeps_source() {
        let err = AppError::file_unreadable(
            "/secret.txt",
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        let source = std::error::Error::source(&err).expect("source present");
        assert_eq!(source.to_string(), "denied");
    }

    #[test]
    fn working_directory_display() {
        let err = AppError::WorkingDirectoryUnavailable(Error::new(ErrorKind::NotFound, "gone"));
        assert_eq!(err.to_string(), "Working directory unavailable: gone");
    }
}
