// src/ui/widgets/hero/widget.rs
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
};

use super::state::HeroState;
use crate::ui::style::{cursor_style, hero_style};

/// The animated banner line: typed text in bold, cursor glyph in green while visible.
pub fn hero_line(state: &HeroState) -> Line<'_> {
    let mut spans = vec![Span::styled(state.visible_text(), hero_style())];
    if state.cursor_visible() {
        spans.push(Span::styled(state.cursor(), cursor_style()));
    }
    Line::from(spans).alignment(Alignment::Center)
}
