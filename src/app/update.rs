use ratatui::crossterm::event::{Event as CrosstermEvent, KeyEvent};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::keymap::map_key;
use super::model::Model;
use crate::event::{AppEvent, Event};
use crate::ui::layout::{block_height, info_block, title_block};
use crate::ui::widgets::{
    hero::{HeroIntent, HeroStateMachine},
    menu::{MenuIntent, MenuStateMachine},
};

/// What the runtime should do after a message has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    None,
    /// Deliver one [`Event::Tick`] after the delay.
    Tick(Duration),
    /// Stop processing; nothing else is scheduled.
    Quit,
}

/// The dispatcher: one message in, next snapshot and a command out.
pub fn update(model: Model, event: Event) -> (Model, Command) {
    match event {
        Event::Tick => handle_tick(model),
        Event::App(app_event) => handle_app_event(model, app_event),
        Event::Crossterm(CrosstermEvent::Key(key)) => handle_key(model, key),
        Event::Crossterm(CrosstermEvent::Resize(width, height)) => {
            handle_resize(model, width, height)
        }
        Event::Crossterm(other) => passthrough(model, &other),
    }
}

fn handle_tick(mut model: Model) -> (Model, Command) {
    let (hero, events) = HeroStateMachine::transition(model.hero, HeroIntent::Tick);
    model.hero = hero;
    model.ticks += 1;
    model.debug = model.diagnostics();
    trace_events("hero", &events);

    let command = Command::Tick(model.tick_delay);
    (model, command)
}

fn handle_app_event(mut model: Model, app_event: AppEvent) -> (Model, Command) {
    let intent = match app_event {
        AppEvent::Quit => {
            info!(ticks = model.ticks, "quit requested");
            return (model, Command::Quit);
        }
        AppEvent::MenuNext => MenuIntent::Next,
        AppEvent::MenuPrevious => MenuIntent::Previous,
    };

    let (menu, events) = MenuStateMachine::transition(model.menu, intent);
    model.menu = menu;
    model.debug = model.diagnostics();
    trace_events("menu", &events);
    (model, Command::None)
}

fn handle_key(model: Model, key: KeyEvent) -> (Model, Command) {
    match map_key(&key) {
        Some(app_event) => handle_app_event(model, app_event),
        None => passthrough(model, &CrosstermEvent::Key(key)),
    }
}

fn handle_resize(mut model: Model, width: u16, height: u16) -> (Model, Command) {
    let header_height = block_height(&title_block(), 1);
    let footer_height = block_height(&info_block(), 1);
    let vertical_margin = header_height + footer_height;

    model
        .viewport
        .resize(width, height.saturating_sub(vertical_margin), header_height);

    if !model.ready {
        info!(width, height, "first terminal size received, ui ready");
        model.ready = true;
    } else {
        debug!(width, height, "terminal resized");
    }
    (model, Command::None)
}

/// Anything the app doesn't claim goes to the viewport's default handling.
fn passthrough(mut model: Model, event: &CrosstermEvent) -> (Model, Command) {
    if model.viewport.update(event) {
        debug!(offset = model.viewport.offset(), "viewport scrolled");
    }
    (model, Command::None)
}

fn trace_events<E: Serialize>(source: &str, events: &[E]) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    for event in events {
        match serde_json::to_string(event) {
            Ok(payload) => debug!(source, %payload, "state machine event"),
            Err(err) => warn!(source, %err, "could not serialise event"),
        }
    }
}
