// src/ui/widgets/viewport/state.rs
use ratatui::crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
    MouseEventKind,
};

/// Scrollable main region.
///
/// The canvas is three viewport heights tall: a screen of padding above and
/// below the content, with the content on the middle screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
    /// Terminal row the viewport starts on (below the header).
    pub y_position: u16,
    offset: u16,
    sized: bool,
}

impl Viewport {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn canvas_height(&self) -> u16 {
        self.height.saturating_mul(3)
    }

    /// First canvas row of the middle screen.
    pub fn middle_screen(&self) -> u16 {
        self.height
    }

    pub fn max_offset(&self) -> u16 {
        self.canvas_height().saturating_sub(self.height)
    }

    /// Applies new geometry. The first call parks the offset on the middle
    /// screen; later calls only clamp it.
    pub fn resize(&mut self, width: u16, height: u16, y_position: u16) {
        self.width = width;
        self.height = height;
        self.y_position = y_position;
        if self.sized {
            self.offset = self.offset.min(self.max_offset());
        } else {
            self.offset = self.height.min(self.max_offset());
            self.sized = true;
        }
    }

    /// Default handling for input the app itself doesn't use.
    /// Returns whether the offset moved.
    pub fn update(&mut self, event: &CrosstermEvent) -> bool {
        let before = self.offset;
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            CrosstermEvent::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
        before != self.offset
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        let half_page = (self.height / 2).max(1);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => self.scroll_up(half_page),
            KeyCode::Char('d') if ctrl => self.scroll_down(half_page),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::PageUp | KeyCode::Char('b') => self.scroll_up(self.height.max(1)),
            KeyCode::PageDown | KeyCode::Char('f') | KeyCode::Char(' ') => {
                self.scroll_down(self.height.max(1))
            }
            KeyCode::Home | KeyCode::Char('g') => self.offset = 0,
            KeyCode::End | KeyCode::Char('G') => self.offset = self.max_offset(),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_up(1),
            MouseEventKind::ScrollDown => self.scroll_down(1),
            _ => {}
        }
    }

    fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset());
    }
}
