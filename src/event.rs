use color_eyre::eyre::OptionExt;
use futures::{FutureExt, StreamExt};
use ratatui::crossterm::event::Event as CrosstermEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Representation of all possible events.
#[derive(Clone, Debug)]
pub enum Event {
    /// One timer firing. Each tick is scheduled on its own, never by an interval.
    Tick,
    /// Crossterm events.
    Crossterm(CrosstermEvent),
    /// Application events.
    App(AppEvent),
}

/// Application events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    // Navigation
    MenuNext,
    MenuPrevious,

    // System
    Quit,
}

/// Terminal event handler.
#[derive(Debug)]
pub struct EventHandler {
    /// Event sender channel.
    sender: mpsc::UnboundedSender<Event>,
    /// Event receiver channel.
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Constructs a new instance of [`EventHandler`] and spawns a task reading terminal events.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let actor = EventTask::new(sender.clone());
        tokio::spawn(async { actor.run().await });
        Self { sender, receiver }
    }

    /// Channel only, no terminal reader. Events arrive through [`EventHandler::send`]
    /// and [`EventHandler::schedule_tick`].
    pub fn headless() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Receives an event from the sender.
    pub async fn next(&mut self) -> color_eyre::Result<Event> {
        self.receiver
            .recv()
            .await
            .ok_or_eyre("Failed to receive event")
    }

    /// Queue an app event to be sent to the event receiver.
    pub fn send(&mut self, app_event: AppEvent) {
        let _ = self.sender.send(Event::App(app_event));
    }

    /// Sends exactly one [`Event::Tick`] after `delay`.
    pub fn schedule_tick(&self, delay: Duration) {
        let sender = self.sender.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the app has quit.
            let _ = sender.send(Event::Tick);
        });
    }
}

/// A task that forwards crossterm events into the channel.
struct EventTask {
    /// Event sender channel.
    sender: mpsc::UnboundedSender<Event>,
}

impl EventTask {
    /// Constructs a new instance of [`EventTask`].
    fn new(sender: mpsc::UnboundedSender<Event>) -> Self {
        Self { sender }
    }

    /// Runs the event task.
    async fn run(self) -> color_eyre::Result<()> {
        // Crossterm only reports size changes, so report the starting size ourselves.
        match crossterm::terminal::size() {
            Ok((width, height)) => self.send(Event::Crossterm(CrosstermEvent::Resize(width, height))),
            Err(err) => warn!(%err, "could not read initial terminal size"),
        }

        let mut reader = crossterm::event::EventStream::new();
        loop {
            let crossterm_event = reader.next().fuse();
            tokio::select! {
              _ = self.sender.closed() => {
                break;
              }
              event = crossterm_event => match event {
                Some(Ok(evt)) => self.send(Event::Crossterm(evt)),
                Some(Err(err)) => {
                    warn!(%err, "terminal event stream failed");
                    break;
                }
                None => break,
              }
            };
        }
        info!("event reader stopped");
        Ok(())
    }

    /// Sends an event to the receiver.
    fn send(&self, event: Event) {
        let _ = self.sender.send(event);
    }
}
