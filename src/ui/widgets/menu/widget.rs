// src/ui/widgets/menu/widget.rs
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::state::MenuState;
use crate::ui::style::highlighted_style;

const ITEM_GAP: &str = "  ";

/// Every label prefixed by a two-space gap; the selected one highlighted.
pub fn menu_line(state: &MenuState) -> Line<'_> {
    let mut spans = Vec::with_capacity(state.items().len() * 2);
    for (i, item) in state.items().iter().enumerate() {
        spans.push(Span::raw(ITEM_GAP));
        if i == state.selected() {
            spans.push(Span::styled(item.as_str(), highlighted_style()));
        } else {
            spans.push(Span::raw(item.as_str()));
        }
    }
    Line::from(spans)
}

pub struct MenuWidget<'a> {
    state: &'a MenuState,
}

impl<'a> MenuWidget<'a> {
    pub fn new(state: &'a MenuState) -> Self {
        Self { state }
    }

    pub fn width(&self) -> u16 {
        u16::try_from(menu_line(self.state).width()).unwrap_or(u16::MAX)
    }
}

impl Widget for MenuWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        // Single row, vertically centred in whatever we were given.
        let row = Rect {
            y: area.y + area.height.saturating_sub(1) / 2,
            height: 1,
            ..area
        };
        Paragraph::new(menu_line(self.state))
            .alignment(Alignment::Right)
            .render(row, buf);
    }
}
