use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::AppEvent;

/// Keys the app handles itself. Everything else belongs to the viewport.
pub fn map_key(key: &KeyEvent) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(AppEvent::Quit),
        KeyCode::Char('c' | 'C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(AppEvent::Quit)
        }
        KeyCode::Left | KeyCode::Char('h') => Some(AppEvent::MenuPrevious),
        KeyCode::Right | KeyCode::Char('l') => Some(AppEvent::MenuNext),
        _ => None,
    }
}
