use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::ThemeColors;

/// Key hints appended after the status text, as (key, action) pairs.
const KEY_HINTS: [(&str, &str); 4] = [
    ("↑/↓", "Navigate"),
    ("Enter", "Open"),
    ("Backspace", "Go Up"),
    ("Ctrl-C", "Quit"),
];

/// Footer line: current status (or error) followed by key hints.
pub struct StatusBarWidget<'a> {
    status: &'a str,
    is_error: bool,
    theme: &'a ThemeColors,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(status: &'a str, is_error: bool, theme: &'a ThemeColors) -> Self {
        Self {
            status,
            is_error,
            theme,
        }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let base = Style::default()
            .bg(self.theme.status_bg)
            .fg(self.theme.status_fg);
        buf.set_style(area, base);

        let mut spans = Vec::with_capacity(2 + KEY_HINTS.len() * 2);
        if self.is_error {
            spans.push(Span::styled(
                format!("Error: {}", self.status),
                base.fg(self.theme.error_fg).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(self.status, base));
        }

        spans.push(Span::styled(" | Keys: ", base));
        let key_style = base.fg(self.theme.key_fg);
        for (i, (key, action)) in KEY_HINTS.iter().enumerate() {
            let sep = if i + 1 < KEY_HINTS.len() { " | " } else { "" };
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(" {}{}", action, sep), base));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::row_text;
    use crate::theme;

    fn render(status: &str, is_error: bool, width: u16) -> Buffer {
        let tc = theme::dark_theme();
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(status, is_error, &tc).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_normal_bar_rendering() {
        let buf = render("/home/user/project", false, 120);
        let content = row_text(&buf, 0);
        assert!(content.starts_with("/home/user/project | Keys: "));
        assert!(content.contains("Enter Open"));
        assert!(content.contains("Backspace Go Up"));
        assert!(content.contains("Ctrl-C Quit"));
    }

    #[test]
    fn test_error_rendering() {
        let tc = theme::dark_theme();
        let buf = render("/gone: No such file or directory", true, 120);
        let content = row_text(&buf, 0);
        assert!(content.starts_with("Error: /gone: No such file or directory"));
        let cell = buf.cell((0, 0)).unwrap();
        assert_eq!(cell.fg, tc.error_fg);
        assert_eq!(cell.bg, tc.status_bg);
    }

    #[test]
    fn test_background_fills_width() {
        let tc = theme::dark_theme();
        let buf = render("/", false, 200);
        assert_eq!(buf.cell((199, 0)).unwrap().bg, tc.status_bg);
    }

    #[test]
    fn test_zero_area_does_not_panic() {
        render("/path", false, 0);
    }
}
