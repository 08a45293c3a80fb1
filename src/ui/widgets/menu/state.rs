// src/ui/widgets/menu/state.rs
use serde::Serialize;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    items: Vec<String>,
    selected: usize,
}

impl MenuState {
    pub fn new(items: Vec<String>) -> Result<Self> {
        if items.is_empty() {
            return Err(ConfigError::EmptyMenu);
        }
        Ok(Self { items, selected: 0 })
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_label(&self) -> &str {
        &self.items[self.selected]
    }
}

// ----------------------------------------------------------------------------
// INTENT
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIntent {
    Next,
    Previous,
}

// ----------------------------------------------------------------------------
// EVENTS
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum MenuEvent {
    SelectionChanged { from: usize, to: usize },
}

// ----------------------------------------------------------------------------
// STATE MACHINE - Pure function: (State, Intent) -> (State, Vec<Event>)
// ----------------------------------------------------------------------------

pub struct MenuStateMachine;

impl MenuStateMachine {
    pub fn transition(state: MenuState, intent: MenuIntent) -> (MenuState, Vec<MenuEvent>) {
        match intent {
            MenuIntent::Next => Self::handle_next(state),
            MenuIntent::Previous => Self::handle_previous(state),
        }
    }

    fn handle_next(mut state: MenuState) -> (MenuState, Vec<MenuEvent>) {
        let from = state.selected;
        state.selected = (from + 1) % state.items.len();
        Self::changed(state, from)
    }

    fn handle_previous(mut state: MenuState) -> (MenuState, Vec<MenuEvent>) {
        let from = state.selected;
        let len = state.items.len();
        state.selected = (from + len - 1) % len;
        Self::changed(state, from)
    }

    fn changed(state: MenuState, from: usize) -> (MenuState, Vec<MenuEvent>) {
        if state.selected == from {
            return (state, vec![]);
        }
        let to = state.selected;
        (state, vec![MenuEvent::SelectionChanged { from, to }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(items: &[&str]) -> MenuState {
        MenuState::new(items.iter().map(|i| i.to_string()).collect()).unwrap()
    }

    fn apply(state: MenuState, intent: MenuIntent) -> MenuState {
        MenuStateMachine::transition(state, intent).0
    }

    #[test]
    fn test_rejects_empty_menu() {
        assert_eq!(MenuState::new(vec![]), Err(ConfigError::EmptyMenu));
    }

    #[test]
    fn test_previous_wraps_to_last_and_next_wraps_to_first() {
        let state = menu(&["X", "Y", "Z"]);
        let state = apply(state, MenuIntent::Previous);
        assert_eq!(state.selected(), 2);
        assert_eq!(state.selected_label(), "Z");

        let state = apply(state, MenuIntent::Next);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn test_next_len_times_is_identity_from_any_start() {
        let items = ["A", "B", "C", "D", "E"];
        for start in 0..items.len() {
            let mut state = menu(&items);
            for _ in 0..start {
                state = apply(state, MenuIntent::Next);
            }
            assert_eq!(state.selected(), start);

            for _ in 0..items.len() {
                state = apply(state, MenuIntent::Next);
            }
            assert_eq!(state.selected(), start);
        }
    }

    #[test]
    fn test_single_item_emits_no_change() {
        let state = menu(&["ONLY"]);
        let (state, events) = MenuStateMachine::transition(state, MenuIntent::Next);
        assert_eq!(state.selected(), 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_selection_change_is_reported() {
        let (_, events) = MenuStateMachine::transition(menu(&["A", "B"]), MenuIntent::Next);
        assert_eq!(events, vec![MenuEvent::SelectionChanged { from: 0, to: 1 }]);
    }
}
