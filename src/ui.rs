use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

use crate::app::App;
use crate::components::entry_table::EntryTableWidget;
use crate::components::header::HeaderWidget;
use crate::components::preview::PreviewWidget;
use crate::components::status_bar::StatusBarWidget;

/// Render the application UI: header, table and preview side by side, footer.
pub fn render(app: &mut App, frame: &mut Frame) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    // Borders and the column header row are not scrollable.
    app.page_size = (columns[0].height as usize).saturating_sub(3).max(1);

    frame.render_widget(HeaderWidget::new(app.nav.current_path(), &app.theme), rows[0]);

    let table_block = Block::default()
        .borders(Borders::ALL)
        .title(" Directory Contents ")
        .border_style(Style::default().fg(app.theme.table_border_fg));
    let table = EntryTableWidget::new(app.nav.entries(), &app.theme).block(table_block);
    frame.render_stateful_widget(table, columns[0], &mut app.table_state);

    let preview_block = Block::default()
        .borders(Borders::ALL)
        .title(" File Preview ")
        .border_style(Style::default().fg(app.theme.preview_border_fg));
    let preview = PreviewWidget::new(&app.preview, &app.theme)
        .wrap(app.wrap_preview)
        .block(preview_block);
    frame.render_widget(preview, columns[1]);

    let (status, is_error) = app.status_line();
    frame.render_widget(StatusBarWidget::new(status, is_error, &app.theme), rows[2]);
}
