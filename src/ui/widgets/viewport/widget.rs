// src/ui/widgets/viewport/widget.rs
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect, Size},
    text::Text,
    widgets::{Paragraph, StatefulWidget, Widget},
};
use tui_scrollview::{ScrollView, ScrollViewState};

use super::state::Viewport;

/// Draws `content` on the middle screen of the viewport canvas and shows the
/// slice selected by the current offset.
pub struct ViewportWidget<'a> {
    viewport: &'a Viewport,
    content: Text<'a>,
}

impl<'a> ViewportWidget<'a> {
    pub fn new(viewport: &'a Viewport, content: impl Into<Text<'a>>) -> Self {
        Self {
            viewport,
            content: content.into(),
        }
    }
}

impl Widget for ViewportWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.viewport.height == 0 {
            return;
        }

        // One column is left free for the vertical scrollbar.
        let canvas = Size::new(area.width.saturating_sub(1).max(1), self.viewport.canvas_height());
        let mut scroll_view = ScrollView::new(canvas);

        let height = self.viewport.height;
        let rows = u16::try_from(self.content.height())
            .unwrap_or(u16::MAX)
            .min(height);
        let top = self.viewport.middle_screen() + (height - rows) / 2;
        let content_area = Rect::new(0, top, canvas.width, rows);
        scroll_view.render_widget(
            Paragraph::new(self.content).alignment(Alignment::Center),
            content_area,
        );

        // Rendering must not write back into the model, so work on a copy.
        let mut state = ScrollViewState::default();
        state.set_offset(Position::new(0, self.viewport.offset()));
        scroll_view.render(area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_content_lands_in_the_middle_of_the_visible_area() {
        let mut viewport = Viewport::default();
        viewport.resize(21, 5, 0);

        let area = Rect::new(0, 0, 21, 5);
        let mut buf = Buffer::empty(area);
        ViewportWidget::new(&viewport, "HELLO").render(area, &mut buf);

        for y in 0..5 {
            assert_eq!(row(&buf, y).contains("HELLO"), y == 2, "row {}", y);
        }
    }

    #[test]
    fn test_scrolled_away_content_is_hidden() {
        let mut viewport = Viewport::default();
        viewport.resize(21, 5, 0);
        viewport.update(&ratatui::crossterm::event::Event::Key(
            ratatui::crossterm::event::KeyEvent::from(ratatui::crossterm::event::KeyCode::End),
        ));

        let area = Rect::new(0, 0, 21, 5);
        let mut buf = Buffer::empty(area);
        ViewportWidget::new(&viewport, "HELLO").render(area, &mut buf);

        for y in 0..5 {
            assert!(!row(&buf, y).contains("HELLO"));
        }
    }
}
