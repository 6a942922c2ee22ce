//! Centralized theme for the terminal preview.
//!
//! Render code uses `theme::module::CONSTANT` rather than hardcoding colors.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);
    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
}

/// Error popup styles
pub mod error_popup {
    use super::*;

    pub const BORDER: Color = Color::Rgb(255, 135, 145);
    pub const BG: Color = palette::BG_DARK;
    pub const TITLE: Style = Style::new()
        .fg(palette::ERROR)
        .add_modifier(Modifier::BOLD);
    pub const CODE: Style = Style::new()
        .fg(palette::ERROR)
        .add_modifier(Modifier::BOLD);
    pub const MESSAGE: Style = Style::new().fg(palette::TEXT);
    pub const CLOSE_HINT: Style = Style::new().fg(palette::TEXT_MUTED);
}

/// Wait overlay styles
pub mod wait_screen {
    use super::*;

    pub const BORDER: Color = palette::YELLOW;
    pub const BG: Color = palette::BG_HIGHLIGHT;
    pub const TEXT: Style = Style::new().fg(palette::TEXT);
}
