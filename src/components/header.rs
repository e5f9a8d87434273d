use std::path::Path;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::ThemeColors;

/// One-line title bar showing the current directory.
pub struct HeaderWidget<'a> {
    path: &'a Path,
    theme: &'a ThemeColors,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(path: &'a Path, theme: &'a ThemeColors) -> Self {
        Self { path, theme }
    }
}

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .bg(self.theme.header_bg)
            .fg(self.theme.header_fg)
            .add_modifier(Modifier::BOLD);
        let title = format!("File Explorer - {}", self.path.display());
        Paragraph::new(Line::from(title))
            .alignment(Alignment::Center)
            .style(style)
            .render(area, buf);
    }
}
