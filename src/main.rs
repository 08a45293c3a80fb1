use codewave::app::{App, Command, Model};
use codewave::config::HeroConfig;
use codewave::event::EventHandler;
use codewave::util::{log, terminal};
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use ratatui::DefaultTerminal;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(log::LOG_DIR, "codewave.log");

    // Bad word or menu lists fail here, before the terminal is touched.
    let (model, command) = Model::init(&HeroConfig::default())?;

    let terminal = terminal::init()?;
    let result = run(terminal, model, command).await;
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    if let Err(err) = &result {
        tracing::error!(%err, "could not run program");
    }
    result
}

async fn run(terminal: DefaultTerminal, model: Model, command: Command) -> color_eyre::Result<()> {
    execute!(std::io::stdout(), EnableMouseCapture)?;
    App::new(model, command, EventHandler::new()).run(terminal).await
}
