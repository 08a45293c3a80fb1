use codewave::app::{update, App, Command, Model};
use codewave::config::HeroConfig;
use codewave::event::{AppEvent, Event, EventHandler};
use codewave::ui::compose;
use codewave::ui::widgets::hero::Phase;
use ratatui::crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

fn key(code: KeyCode) -> Event {
    Event::Crossterm(CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn config(words: &[&str], blink_target: u32) -> HeroConfig {
    HeroConfig {
        words: words.iter().map(|w| w.to_string()).collect(),
        blink_target,
        ..HeroConfig::default()
    }
}

fn run_ticks(mut model: Model, ticks: usize) -> Model {
    for _ in 0..ticks {
        let (next, command) = update(model, Event::Tick);
        assert_eq!(command, Command::Tick(next.tick_delay));
        model = next;
    }
    model
}

#[test]
fn test_single_word_cycle_through_dispatcher() {
    let (mut model, command) = Model::init(&config(&["AB"], 1)).unwrap();
    assert_eq!(command, Command::Tick(Duration::from_millis(150)));

    let mut shown = Vec::new();
    for _ in 0..6 {
        model = update(model, Event::Tick).0;
        shown.push(model.hero.display_text().to_string());
    }
    assert_eq!(shown, ["A▋", "AB▋", "AB", "A▋", "▋", "A▋"]);
}

#[test]
fn test_every_word_cycles_back_to_the_first() {
    let hero = HeroConfig::default();
    let (mut model, _) = Model::init(&hero).unwrap();

    for i in 0..hero.words.len() {
        assert_eq!(model.hero.word_index(), i);
        assert_eq!(model.hero.phase(), Phase::Typing);
        let len = hero.words[i].chars().count();
        model = run_ticks(model, len * 2 + hero.blink_target as usize);
    }
    assert_eq!(model.hero.word_index(), 0);
    assert_eq!(model.hero.char_pos(), 0);
}

#[test]
fn test_quit_mid_erase_freezes_state() {
    let (model, _) = Model::init(&config(&["HELLO"], 2)).unwrap();
    let model = run_ticks(model, 8);
    assert_eq!(model.hero.phase(), Phase::Erasing);

    let (after, command) = update(model.clone(), key(KeyCode::Esc));
    assert_eq!(command, Command::Quit);
    assert_eq!(after, model);
}

#[test]
fn test_menu_selection_is_drawn_after_navigation() {
    let (model, _) = Model::init(&HeroConfig::default()).unwrap();
    let model = update(model, Event::Crossterm(CrosstermEvent::Resize(120, 24))).0;
    let model = update(model, key(KeyCode::Char('h'))).0;
    let model = update(model, key(KeyCode::Char('h'))).0;
    assert_eq!(model.menu.selected_label(), "CULTURE");

    let rows = compose(&model, 120, 24);
    assert!(rows[1].contains("CULTURE"));
    assert!(rows[22].contains("CULTURE"));
}

#[test]
fn test_nothing_but_placeholder_before_resize() {
    let (model, _) = Model::init(&HeroConfig::default()).unwrap();
    let model = run_ticks(model, 3);
    let rows = compose(&model, 40, 6);
    assert!(rows.iter().any(|r| r.contains("Initializing...")));
    assert!(!rows.iter().any(|r| r.contains("BRI")));
}

#[tokio::test]
async fn test_app_runs_tick_chain_until_quit() {
    let hero = HeroConfig {
        tick_delay: Duration::from_millis(5),
        ..config(&["GO"], 0)
    };
    let (model, command) = Model::init(&hero).unwrap();
    let mut app = App::new(model, command, EventHandler::headless());

    let mut ticks = 0;
    while ticks < 4 {
        let event = tokio::time::timeout(Duration::from_secs(2), app.events.next())
            .await
            .expect("tick should arrive")
            .unwrap();
        if matches!(event, Event::Tick) {
            ticks += 1;
        }
        app.handle_event(event);
    }
    assert_eq!(app.model.ticks, 4);
    assert_eq!(app.model.hero.display_text(), "▋");

    app.events.send(AppEvent::Quit);
    let event = app.events.next().await.unwrap();
    app.handle_event(event);
    assert!(!app.running);

    // The tick scheduled by the last processed tick still fires, but is not applied.
    let late = tokio::time::timeout(Duration::from_secs(2), app.events.next())
        .await
        .expect("pending tick")
        .unwrap();
    app.handle_event(late);
    assert_eq!(app.model.ticks, 4);
}
