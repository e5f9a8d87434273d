use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Cell, Row, StatefulWidget, Table, TableState},
};

use crate::format::{format_modified, format_size};
use crate::fs::DirectoryEntry;
use crate::theme::ThemeColors;

/// Width of the "Modified" column (`YYYY-MM-DD HH:MM:SS`).
const MODIFIED_WIDTH: u16 = 19;
const SIZE_WIDTH: u16 = 10;

/// Directory listing rendered as a Name / Size / Modified table.
pub struct EntryTableWidget<'a> {
    entries: &'a [DirectoryEntry],
    theme: &'a ThemeColors,
    block: Option<Block<'a>>,
}

impl<'a> EntryTableWidget<'a> {
    pub fn new(entries: &'a [DirectoryEntry], theme: &'a ThemeColors) -> Self {
        Self {
            entries,
            theme,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn size_text(entry: &DirectoryEntry) -> String {
        if entry.is_parent() {
            String::new()
        } else if entry.is_dir {
            "-".to_string()
        } else {
            format_size(entry.size)
        }
    }

    fn row(&self, entry: &'a DirectoryEntry) -> Row<'a> {
        let name_style = if entry.is_dir {
            Style::default().fg(self.theme.dir_fg)
        } else {
            Style::default().fg(self.theme.file_fg)
        };
        let meta_style = Style::default().fg(self.theme.meta_fg);
        Row::new(vec![
            Cell::from(entry.name.as_str()).style(name_style),
            Cell::from(Self::size_text(entry)).style(meta_style),
            Cell::from(format_modified(entry.modified)).style(meta_style),
        ])
    }
}

impl StatefulWidget for EntryTableWidget<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TableState) {
        let header = Row::new(vec!["Name", "Size", "Modified"]).style(
            Style::default()
                .fg(self.theme.table_header_fg)
                .add_modifier(Modifier::BOLD),
        );
        let rows: Vec<Row> = self.entries.iter().map(|e| self.row(e)).collect();
        let widths = [
            Constraint::Min(10),
            Constraint::Length(SIZE_WIDTH),
            Constraint::Length(MODIFIED_WIDTH),
        ];

        let mut table = Table::new(rows, widths).header(header).row_highlight_style(
            Style::default()
                .bg(self.theme.selected_bg)
                .fg(self.theme.selected_fg),
        );
        if let Some(block) = self.block {
            table = table.block(block);
        }
        StatefulWidget::render(table, area, buf, state);
    }
}
