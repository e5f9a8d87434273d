use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

/// Handle a key event.
///
/// Global keys are checked first; a matched global key is not passed on to
/// the entry table.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if handle_global_key(app, &key) {
        return;
    }
    handle_table_key(app, &key);
}

/// Quit and go-up work regardless of which row is highlighted.
fn handle_global_key(app: &mut App, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') => app.quit(),
        KeyCode::Backspace => app.go_up(),
        _ => return false,
    }
    true
}

fn handle_table_key(app: &mut App, key: &KeyEvent) {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Up if shift => app.scroll_preview_up(),
        KeyCode::Down if shift => app.scroll_preview_down(),
        KeyCode::Char('K') => app.scroll_preview_up(),
        KeyCode::Char('J') => app.scroll_preview_down(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.activate_selected(),
        KeyCode::Left | KeyCode::Char('h') => app.go_up(),
        KeyCode::F(5) | KeyCode::Char('r') => app.refresh(),
        _ => {}
    }
}
