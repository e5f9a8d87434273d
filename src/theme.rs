//! Built-in color palettes and their resolution from config.

use ratatui::style::Color;

use crate::config::AppConfig;

/// All runtime colors used in the UI.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Header
    pub header_bg: Color,
    pub header_fg: Color,

    // Entry table
    pub table_border_fg: Color,
    pub table_header_fg: Color,
    pub dir_fg: Color,
    pub file_fg: Color,
    pub meta_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Preview pane
    pub preview_border_fg: Color,
    pub preview_fg: Color,

    // Footer
    pub status_bg: Color,
    pub status_fg: Color,
    pub key_fg: Color,

    // Semantic
    pub error_fg: Color,
    pub dim_fg: Color,
}

/// Dark theme using Catppuccin Mocha palette.
pub fn dark_theme() -> ThemeColors {
    ThemeColors {
        header_bg: Color::Rgb(30, 30, 46),  // #1e1e2e (base)
        header_fg: Color::Rgb(137, 180, 250), // #89b4fa (blue)

        table_border_fg: Color::Rgb(166, 227, 161), // #a6e3a1 (green)
        table_header_fg: Color::Rgb(205, 214, 244), // #cdd6f4 (text)
        dir_fg: Color::Rgb(137, 180, 250),          // #89b4fa (blue)
        file_fg: Color::Rgb(205, 214, 244),         // #cdd6f4
        meta_fg: Color::Rgb(166, 173, 200),         // #a6adc8 (subtext0)
        selected_bg: Color::Rgb(64, 160, 43),       // #40a02b (green, deep)
        selected_fg: Color::Rgb(255, 255, 255),

        preview_border_fg: Color::Rgb(249, 226, 175), // #f9e2af (yellow)
        preview_fg: Color::Rgb(205, 214, 244),

        status_bg: Color::Rgb(69, 71, 90), // #45475a (surface1)
        status_fg: Color::Rgb(205, 214, 244),
        key_fg: Color::Rgb(249, 226, 175),

        error_fg: Color::Rgb(243, 139, 168), // #f38ba8 (red)
        dim_fg: Color::Rgb(108, 112, 134),   // #6c7086 (overlay0)
    }
}

/// Light theme using Catppuccin Latte palette.
pub fn light_theme() -> ThemeColors {
    ThemeColors {
        header_bg: Color::Rgb(220, 224, 232), // #dce0e8 (crust)
        header_fg: Color::Rgb(30, 102, 245),  // #1e66f5 (blue)

        table_border_fg: Color::Rgb(64, 160, 43), // #40a02b (green)
        table_header_fg: Color::Rgb(76, 79, 105), // #4c4f69 (text)
        dir_fg: Color::Rgb(30, 102, 245),
        file_fg: Color::Rgb(76, 79, 105),
        meta_fg: Color::Rgb(108, 111, 133), // #6c6f85 (subtext0)
        selected_bg: Color::Rgb(172, 216, 160),
        selected_fg: Color::Rgb(76, 79, 105),

        preview_border_fg: Color::Rgb(223, 142, 29), // #df8e1d (yellow)
        preview_fg: Color::Rgb(76, 79, 105),

        status_bg: Color::Rgb(204, 208, 218), // #ccd0da (surface0)
        status_fg: Color::Rgb(76, 79, 105),
        key_fg: Color::Rgb(223, 142, 29),

        error_fg: Color::Rgb(210, 15, 57), // #d20f39 (red)
        dim_fg: Color::Rgb(156, 160, 176), // #9ca0b0 (overlay0)
    }
}

/// Resolve the final `ThemeColors` from config. Unknown schemes fall back to dark.
pub fn resolve_theme(config: &AppConfig) -> ThemeColors {
    match config.theme_scheme() {
        "light" => light_theme(),
        _ => dark_theme(),
    }
}
