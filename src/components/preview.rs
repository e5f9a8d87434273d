use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::app::PreviewState;
use crate::theme::ThemeColors;

/// Shown before anything has been previewed.
pub const PLACEHOLDER: &str = "Select a file to preview its contents";

const TAB_STOP: &str = "    ";

/// Preview widget that renders the current preview result.
pub struct PreviewWidget<'a> {
    preview_state: &'a PreviewState,
    theme: &'a ThemeColors,
    wrap: bool,
    block: Option<Block<'a>>,
}

impl<'a> PreviewWidget<'a> {
    pub fn new(preview_state: &'a PreviewState, theme: &'a ThemeColors) -> Self {
        Self {
            preview_state,
            theme,
            wrap: true,
            block: None,
        }
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

/// Make file content safe to put in terminal cells: CRLF and lone CR become
/// line breaks, tabs expand, and any other control character is dropped.
fn printable_text(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            '\n' => out.push('\n'),
            '\t' => out.push_str(TAB_STOP),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

impl Widget for PreviewWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (text, style) = match &self.preview_state.result {
            None => (
                PLACEHOLDER.to_string(),
                Style::default().fg(self.theme.dim_fg),
            ),
            Some(result) if result.is_error() => (
                result.display_text(),
                Style::default().fg(self.theme.error_fg),
            ),
            Some(result) if result.is_text() => (
                printable_text(&result.display_text()),
                Style::default().fg(self.theme.preview_fg),
            ),
            Some(result) => (
                result.display_text(),
                Style::default().fg(self.theme.meta_fg),
            ),
        };

        let mut paragraph = Paragraph::new(text)
            .style(style)
            .scroll((self.preview_state.scroll_offset, 0));
        if self.wrap {
            paragraph = paragraph.wrap(Wrap { trim: false });
        }
        if let Some(block) = self.block {
            paragraph = paragraph.block(block);
        }
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::row_text;
    use crate::preview_content::PreviewResult;
    use crate::theme;
    use ratatui::widgets::Borders;

    fn render(state: &PreviewState, area: Rect) -> Buffer {
        let tc = theme::dark_theme();
        let mut buf = Buffer::empty(area);
        PreviewWidget::new(state, &tc).render(area, &mut buf);
        buf
    }

    fn text_state(content: &str) -> PreviewState {
        PreviewState {
            result: Some(PreviewResult::Text {
                content: content.to_string(),
            }),
            scroll_offset: 0,
        }
    }

    #[test]
    fn test_empty_preview_shows_placeholder() {
        let state = PreviewState::default();
        let tc = theme::dark_theme();
        let widget = PreviewWidget::new(&state, &tc)
            .block(Block::default().borders(Borders::ALL).title(" File Preview "));
        let area = Rect::new(0, 0, 50, 5);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        assert!(row_text(&buf, 1).contains(PLACEHOLDER));
    }

    #[test]
    fn test_preview_with_content() {
        let buf = render(&text_state("line 1\nline 2\nline 3"), Rect::new(0, 0, 20, 5));
        assert!(row_text(&buf, 0).contains("line 1"));
        assert!(row_text(&buf, 2).contains("line 3"));
    }

    #[test]
    fn test_preview_scroll_offset() {
        let mut state = text_state("line 1\nline 2\nline 3");
        state.scroll_offset = 1;
        let buf = render(&state, Rect::new(0, 0, 20, 3));
        assert!(row_text(&buf, 0).contains("line 2"));
    }

    #[test]
    fn test_tabs_expanded() {
        let buf = render(&text_state("\tindented"), Rect::new(0, 0, 20, 1));
        assert!(row_text(&buf, 0).starts_with("    indented"));
    }

    #[test]
    fn test_carriage_returns_become_line_breaks() {
        let buf = render(&text_state("abc\rdef\r\nghi"), Rect::new(0, 0, 20, 3));
        assert!(row_text(&buf, 0).starts_with("abc "));
        assert!(row_text(&buf, 1).starts_with("def "));
        assert!(row_text(&buf, 2).starts_with("ghi "));
    }

    #[test]
    fn test_no_control_chars_reach_buffer() {
        let state = text_state("abc\rdef\x7fx\u{85}y\u{9b}z\x1b");
        let buf = render(&state, Rect::new(0, 0, 20, 2));
        for y in 0..2 {
            for x in 0..20 {
                let symbol = buf.cell((x, y)).unwrap().symbol();
                assert!(
                    !symbol.chars().any(char::is_control),
                    "control char at ({}, {}): {:?}",
                    x,
                    y,
                    symbol
                );
            }
        }
        assert!(row_text(&buf, 1).starts_with("defxyz"));
    }

    #[test]
    fn test_printable_text_keeps_unicode() {
        assert_eq!(printable_text("caf\u{e9}\n\u{FFFD}"), "caf\u{e9}\n\u{FFFD}");
    }

    #[test]
    fn test_long_lines_wrap() {
        let buf = render(&text_state("aaaaa bbbbb ccccc"), Rect::new(0, 0, 6, 3));
        assert!(row_text(&buf, 1).contains("bbbbb"));
    }

    #[test]
    fn test_error_uses_error_color() {
        let tc = theme::dark_theme();
        let state = PreviewState {
            result: Some(PreviewResult::Error {
                message: "Error: boom".to_string(),
            }),
            scroll_offset: 0,
        };
        let buf = render(&state, Rect::new(0, 0, 20, 1));
        assert!(row_text(&buf, 0).contains("Error: boom"));
        assert_eq!(buf.cell((0, 0)).unwrap().fg, tc.error_fg);
    }

    #[test]
    fn test_zero_area_no_panic() {
        render(&PreviewState::default(), Rect::new(0, 0, 0, 0));
    }
}
