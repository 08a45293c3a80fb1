pub mod keymap;
pub mod model;
pub mod update;

use color_eyre::Result;
use ratatui::DefaultTerminal;
use tracing::info;

use crate::event::{Event, EventHandler};

pub use model::Model;
pub use update::{update, Command};

/// Application.
///
/// Owns the current snapshot and the event source, and is the only place
/// commands turn into side effects.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Latest snapshot.
    pub model: Model,
    /// Event handler.
    pub events: EventHandler,
}

impl App {
    /// Constructs a new instance of [`App`] and carries out the initial command.
    pub fn new(model: Model, command: Command, events: EventHandler) -> Self {
        let mut app = Self {
            running: true,
            model,
            events,
        };
        app.execute(command);
        app
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while self.running {
            terminal.draw(|frame| frame.render_widget(&self.model, frame.area()))?;

            let event = self.events.next().await?;
            self.handle_event(event);
        }
        info!(ticks = self.model.ticks, "main loop finished");
        Ok(())
    }

    /// Applies one event to completion.
    pub fn handle_event(&mut self, event: Event) {
        if !self.running {
            return;
        }
        let (model, command) = update(self.model.clone(), event);
        self.model = model;
        self.execute(command);
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::Tick(delay) => self.events.schedule_tick(delay),
            Command::Quit => self.quit(),
        }
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeroConfig;
    use crate::event::AppEvent;
    use std::time::Duration;

    fn app() -> App {
        let config = HeroConfig {
            tick_delay: Duration::from_millis(5),
            ..HeroConfig::default()
        };
        let (model, command) = Model::init(&config).unwrap();
        App::new(model, command, EventHandler::headless())
    }

    #[tokio::test]
    async fn test_each_tick_schedules_the_next() {
        let mut app = app();
        for expected in ["B▋", "BR▋", "BRI▋"] {
            let event = tokio::time::timeout(Duration::from_secs(2), app.events.next())
                .await
                .unwrap()
                .unwrap();
            assert!(matches!(event, Event::Tick));
            app.handle_event(event);
            assert_eq!(app.model.hero.display_text(), expected);
        }
    }

    #[tokio::test]
    async fn test_quit_stops_processing() {
        let mut app = app();
        app.handle_event(Event::App(AppEvent::Quit));
        assert!(!app.running);

        let frozen = app.model.clone();
        app.handle_event(Event::Tick);
        app.handle_event(Event::App(AppEvent::MenuNext));
        assert_eq!(app.model, frozen);
    }
}
