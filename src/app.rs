use std::path::PathBuf;
use std::sync::Arc;

use ratatui::widgets::TableState;
use tokio::sync::mpsc;
use tracing::debug;

use crate::config::AppConfig;
use crate::event::{Event, PreviewReady};
use crate::fs::FileSystem;
use crate::navigation::{NavOutcome, NavStatus, NavigationState};
use crate::preview_content::{preview, PreviewResult};
use crate::theme::{resolve_theme, ThemeColors};

/// Hands out preview generations and remembers the newest one.
///
/// Only the result of the newest request may reach the screen; anything
/// older arrived after the user had already moved on.
#[derive(Debug, Default)]
pub struct PreviewTracker {
    latest: u64,
}

impl PreviewTracker {
    /// Start a new request, superseding every earlier one.
    pub fn next_generation(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest
    }
}

/// What the preview pane is showing.
#[derive(Debug, Default)]
pub struct PreviewState {
    /// `None` shows the placeholder.
    pub result: Option<PreviewResult>,
    pub scroll_offset: u16,
}

/// Main application state.
pub struct App {
    pub nav: NavigationState,
    pub preview: PreviewState,
    pub table_state: TableState,
    pub theme: ThemeColors,
    pub wrap_preview: bool,
    pub should_quit: bool,
    /// Rows visible in the entry table, updated on every draw.
    pub page_size: usize,
    fs: Arc<dyn FileSystem>,
    max_preview_bytes: u64,
    tracker: PreviewTracker,
    /// When set, previews run on a blocking thread and come back as events.
    /// Otherwise they are computed inline.
    preview_tx: Option<mpsc::UnboundedSender<Event>>,
}

impl App {
    /// Create the app in the process working directory.
    pub fn new(
        fs: Arc<dyn FileSystem>,
        config: &AppConfig,
        preview_tx: Option<mpsc::UnboundedSender<Event>>,
    ) -> Self {
        let nav = NavigationState::open(Arc::clone(&fs), config.listing_options());
        Self::with_navigation(nav, fs, config, preview_tx)
    }

    pub fn with_navigation(
        nav: NavigationState,
        fs: Arc<dyn FileSystem>,
        config: &AppConfig,
        preview_tx: Option<mpsc::UnboundedSender<Event>>,
    ) -> Self {
        let mut table_state = TableState::default();
        table_state.select(nav.selected());
        Self {
            nav,
            preview: PreviewState::default(),
            table_state,
            theme: resolve_theme(config),
            wrap_preview: config.preview_wrap(),
            should_quit: false,
            page_size: 10,
            fs,
            max_preview_bytes: config.max_preview_bytes(),
            tracker: PreviewTracker::default(),
            preview_tx,
        }
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn select_next(&mut self) {
        let outcome = self.nav.select_next();
        self.apply(outcome);
    }

    pub fn select_previous(&mut self) {
        let outcome = self.nav.select_previous();
        self.apply(outcome);
    }

    pub fn select_first(&mut self) {
        let outcome = self.nav.select_first();
        self.apply(outcome);
    }

    pub fn select_last(&mut self) {
        let outcome = self.nav.select_last();
        self.apply(outcome);
    }

    pub fn page_down(&mut self) {
        let outcome = self.nav.page_down(self.page_size);
        self.apply(outcome);
    }

    pub fn page_up(&mut self) {
        let outcome = self.nav.page_up(self.page_size);
        self.apply(outcome);
    }

    /// Open the highlighted entry.
    pub fn activate_selected(&mut self) {
        let outcome = self.nav.activate_selected();
        self.apply(outcome);
    }

    /// Go to the parent directory.
    pub fn go_up(&mut self) {
        let outcome = self.nav.go_up();
        self.apply(outcome);
    }

    /// Re-read the current directory.
    pub fn refresh(&mut self) {
        let outcome = self.nav.refresh();
        self.apply(outcome);
    }

    pub fn scroll_preview_down(&mut self) {
        self.preview.scroll_offset = self.preview.scroll_offset.saturating_add(1);
    }

    pub fn scroll_preview_up(&mut self) {
        self.preview.scroll_offset = self.preview.scroll_offset.saturating_sub(1);
    }

    /// Status line text and whether it reports an error.
    pub fn status_line(&self) -> (&str, bool) {
        let (NavStatus::Browsing(msg) | NavStatus::Error(msg)) = self.nav.status();
        (msg.as_str(), self.nav.is_error())
    }

    /// Install a finished preview, unless a newer request superseded it.
    pub fn handle_preview_ready(&mut self, ready: PreviewReady) {
        if !self.tracker.is_current(ready.generation) {
            debug!(generation = ready.generation, "discarding stale preview");
            return;
        }
        self.preview.result = Some(ready.result);
        self.preview.scroll_offset = 0;
    }

    fn apply(&mut self, outcome: NavOutcome) {
        match outcome {
            NavOutcome::Idle => {}
            NavOutcome::Failed(err) => {
                // The status line already shows the message.
                debug!(error = ?err, "navigation command failed");
            }
            NavOutcome::Loaded => {
                // Invalidate any preview still in flight for the old listing.
                self.tracker.next_generation();
                self.preview = PreviewState::default();
                self.table_state = TableState::default();
            }
            NavOutcome::Preview(path) => self.request_preview(path),
        }
        self.table_state.select(self.nav.selected());
    }

    fn request_preview(&mut self, path: PathBuf) {
        let generation = self.tracker.next_generation();
        let fs = Arc::clone(&self.fs);
        let max_bytes = self.max_preview_bytes;
        debug!(generation, path = %path.display(), "requesting preview");

        match &self.preview_tx {
            Some(tx) => {
                let tx = tx.clone();
                tokio::task::spawn_blocking(move || {
                    let result = preview(fs.as_ref(), &path, max_bytes);
                    let _ = tx.send(Event::PreviewReady(PreviewReady { generation, result }));
                });
            }
            None => {
                let result = preview(fs.as_ref(), &path, max_bytes);
                self.handle_preview_ready(PreviewReady { generation, result });
            }
        }
    }
}
