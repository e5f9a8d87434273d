mod app;
mod components;
mod config;
mod error;
mod event;
mod format;
mod fs;
mod handler;
mod navigation;
mod preview_content;
mod theme;
mod tui;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use crate::app::App;
use crate::config::AppConfig;
use crate::event::{Event, EventHandler};
use crate::fs::{FileSystem, LocalFs};
use crate::tui::{install_panic_hook, Tui};

/// A terminal-based file explorer with a live preview pane.
///
/// Starts in the current directory. Arrow keys move, Enter opens,
/// Backspace goes up, Ctrl-C quits.
#[derive(Parser, Debug)]
#[command(name = "fe", version, about)]
struct Cli {}

#[tokio::main]
async fn main() -> error::Result<()> {
    let _cli = Cli::parse();
    let config = AppConfig::load();

    install_panic_hook();

    let mut tui = Tui::new()?;
    let mut events = EventHandler::new(Duration::from_millis(config.tick_rate_ms()));

    let fs: Arc<dyn FileSystem> = Arc::new(LocalFs);
    let mut app = App::new(fs, &config, Some(events.sender()));
    info!(path = %app.nav.current_path().display(), "explorer started");

    loop {
        tui.terminal_mut().draw(|frame| {
            ui::render(&mut app, frame);
        })?;

        match events.next().await? {
            Event::Key(key) => handler::handle_key_event(&mut app, key),
            Event::Tick => {}
            Event::Resize(_, _) => {}
            Event::PreviewReady(ready) => app.handle_preview_ready(ready),
        }

        if app.should_quit {
            break;
        }
    }

    tui.restore()?;
    info!("explorer stopped");
    Ok(())
}
