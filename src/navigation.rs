//! Navigation state: where the explorer is and what it lists.
//!
//! [`NavigationState`] owns the current directory, the listed entries and
//! the highlighted row. Every command returns a [`NavOutcome`] describing
//! what the caller should do next (nothing, reset the preview after a
//! reload, preview a path, or report a failure). The state itself never
//! renders anything and never computes previews.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::AppError;
use crate::fs::{sort_entries, DirectoryEntry, FileSystem};

/// How a directory listing is filtered and ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingOptions {
    pub dirs_first: bool,
    pub show_hidden: bool,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            dirs_first: true,
            show_hidden: true,
        }
    }
}

/// Browsing or Error, each with the text for the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavStatus {
    Browsing(String),
    Error(String),
}

/// What a navigation command asks of its caller.
#[derive(Debug)]
pub enum NavOutcome {
    /// Nothing to do beyond redrawing.
    Idle,
    /// A directory was (re)loaded; the previous preview no longer applies.
    Loaded,
    /// The given path should be shown in the preview pane.
    Preview(PathBuf),
    /// The command failed; the status already carries the message.
    Failed(AppError),
}

pub struct NavigationState {
    fs: Arc<dyn FileSystem>,
    options: ListingOptions,
    current_path: PathBuf,
    entries: Vec<DirectoryEntry>,
    selected: Option<usize>,
    status: NavStatus,
}

impl NavigationState {
    /// Open the explorer in the process working directory, or `"."` if it
    /// cannot be resolved.
    pub fn open(fs: Arc<dyn FileSystem>, options: ListingOptions) -> Self {
        let start = fs.working_directory().unwrap_or_else(|e| {
            warn!(error = %e, "falling back to \".\"");
            PathBuf::from(".")
        });
        Self::open_at(fs, options, &start)
    }

    /// Open the explorer at `path`. A failed initial load leaves only the
    /// `".."` row and an error status, so the user can still go up.
    pub fn open_at(fs: Arc<dyn FileSystem>, options: ListingOptions, path: &Path) -> Self {
        let mut state = Self {
            fs,
            options,
            current_path: path.to_path_buf(),
            entries: vec![DirectoryEntry::parent()],
            selected: Some(0),
            status: NavStatus::Browsing(path.display().to_string()),
        };
        state.load_directory(path);
        state
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn status(&self) -> &NavStatus {
        &self.status
    }

    pub fn is_error(&self) -> bool {
        matches!(self.status, NavStatus::Error(_))
    }

    /// List `path` and make it the current directory.
    ///
    /// On failure nothing but the status changes.
    pub fn load_directory(&mut self, path: &Path) -> NavOutcome {
        let children = match self.fs.list_children(path) {
            Ok(children) => children,
            Err(e) => return self.fail(e),
        };

        let mut children: Vec<DirectoryEntry> = children
            .into_iter()
            .filter(|e| self.options.show_hidden || !e.is_hidden())
            .collect();
        sort_entries(&mut children, self.options.dirs_first);

        let mut entries = Vec::with_capacity(children.len() + 1);
        entries.push(DirectoryEntry::parent());
        entries.extend(children);

        debug!(path = %path.display(), count = entries.len() - 1, "loaded directory");
        self.entries = entries;
        self.current_path = path.to_path_buf();
        self.selected = Some(0);
        self.status = NavStatus::Browsing(path.display().to_string());
        NavOutcome::Loaded
    }

    /// The highlighted row moved to `index` without being opened.
    pub fn selection_changed(&mut self, index: usize) -> NavOutcome {
        let Some(entry) = self.entries.get(index) else {
            return NavOutcome::Idle;
        };
        self.selected = Some(index);
        if entry.is_parent() {
            return NavOutcome::Idle;
        }
        NavOutcome::Preview(self.fs.join(&self.current_path, entry.path_name()))
    }

    /// Open the entry at `index`: enter directories, preview files.
    pub fn activate(&mut self, index: usize) -> NavOutcome {
        let Some(entry) = self.entries.get(index) else {
            return NavOutcome::Idle;
        };
        self.selected = Some(index);
        if entry.is_parent() {
            return self.go_up();
        }

        let full_path = self.fs.join(&self.current_path, entry.path_name());
        match self.fs.stat(&full_path) {
            Ok(stat) if stat.is_dir => self.load_directory(&full_path),
            Ok(_) => NavOutcome::Preview(full_path),
            Err(e) => self.fail(e),
        }
    }

    /// Open whatever row is highlighted.
    pub fn activate_selected(&mut self) -> NavOutcome {
        match self.selected {
            Some(index) => self.activate(index),
            None => NavOutcome::Idle,
        }
    }

    /// Load the parent of the current directory, regardless of selection.
    pub fn go_up(&mut self) -> NavOutcome {
        let parent = self.fs.parent_of(&self.current_path);
        self.load_directory(&parent)
    }

    /// Reload the current directory, keeping the highlighted row where it was.
    pub fn refresh(&mut self) -> NavOutcome {
        let previous = self.selected.unwrap_or(0);
        let path = self.current_path.clone();
        match self.load_directory(&path) {
            NavOutcome::Loaded => {
                let index = previous.min(self.entries.len() - 1);
                match self.selection_changed(index) {
                    NavOutcome::Idle => NavOutcome::Loaded,
                    other => other,
                }
            }
            other => other,
        }
    }

    pub fn select_next(&mut self) -> NavOutcome {
        self.move_selection(1)
    }

    pub fn select_previous(&mut self) -> NavOutcome {
        self.move_selection(-1)
    }

    pub fn page_down(&mut self, rows: usize) -> NavOutcome {
        self.move_selection(rows.max(1) as isize)
    }

    pub fn page_up(&mut self, rows: usize) -> NavOutcome {
        self.move_selection(-(rows.max(1) as isize))
    }

    pub fn select_first(&mut self) -> NavOutcome {
        self.select_index(0)
    }

    pub fn select_last(&mut self) -> NavOutcome {
        self.select_index(self.entries.len().saturating_sub(1))
    }

    fn move_selection(&mut self, delta: isize) -> NavOutcome {
        let current = self.selected.unwrap_or(0) as isize;
        let last = self.entries.len().saturating_sub(1) as isize;
        self.select_index((current + delta).clamp(0, last) as usize)
    }

    fn select_index(&mut self, index: usize) -> NavOutcome {
        if self.selected == Some(index) {
            return NavOutcome::Idle;
        }
        self.selection_changed(index)
    }

    fn fail(&mut self, err: AppError) -> NavOutcome {
        warn!(error = %err, "navigation failed");
        self.status = NavStatus::Error(err.to_string());
        NavOutcome::Failed(err)
    }
}
