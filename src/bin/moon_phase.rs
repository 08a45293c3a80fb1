use std::time::Duration;

use codewave::config::MoonConfig;
use codewave::event::{Event, EventHandler};
use codewave::ui::widgets::moon::{MoonIntent, MoonState, MoonStateMachine};
use codewave::util::{log, terminal};
use ratatui::crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind};
use ratatui::widgets::Paragraph;
use ratatui::DefaultTerminal;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(log::LOG_DIR, "moon-phase.log");

    let config = MoonConfig::default();
    let state = MoonState::from_config(&config)?;

    let terminal = terminal::init()?;
    let result = run(terminal, state, config.tick_delay).await;
    ratatui::restore();
    result
}

async fn run(mut terminal: DefaultTerminal, mut state: MoonState, delay: Duration) -> color_eyre::Result<()> {
    let mut events = EventHandler::new();
    events.schedule_tick(delay);

    loop {
        terminal.draw(|frame| frame.render_widget(Paragraph::new(state.frame()), frame.area()))?;

        match events.next().await? {
            Event::Tick => {
                state = MoonStateMachine::transition(state, MoonIntent::Advance);
                events.schedule_tick(delay);
            }
            Event::Crossterm(CrosstermEvent::Key(key))
                if key.kind == KeyEventKind::Press && key.code == KeyCode::Char('q') =>
            {
                break;
            }
            _ => {}
        }
    }
    tracing::info!(frame = state.current(), "moon-phase finished");
    Ok(())
}
