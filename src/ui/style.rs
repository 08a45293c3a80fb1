use ratatui::style::{Color, Style, Stylize};

pub const HIGHLIGHT_BG: Color = Color::Rgb(0xfe, 0xfe, 0xfe);
pub const CURSOR_FG: Color = Color::Rgb(0x00, 0xff, 0x00);

/// Selected menu item.
pub fn highlighted_style() -> Style {
    Style::default().bold().bg(HIGHLIGHT_BG)
}

pub fn hero_style() -> Style {
    Style::default().bold()
}

pub fn cursor_style() -> Style {
    Style::default().fg(CURSOR_FG)
}

pub fn footer_style() -> Style {
    Style::default().dim()
}
