use std::time::Duration;

use super::update::Command;
use crate::config::HeroConfig;
use crate::error::Result;
use crate::ui::widgets::{hero::HeroState, menu::MenuState, viewport::Viewport};

pub const KEY_HELP: &str = "q quit · ←/→ menu · ↑/↓ scroll";

/// One immutable snapshot of everything on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub title: String,
    pub hero: HeroState,
    pub menu: MenuState,
    pub viewport: Viewport,
    /// Set by the first resize; nothing but a placeholder is drawn before that.
    pub ready: bool,
    /// Footer diagnostics.
    pub debug: String,
    pub tick_delay: Duration,
    pub ticks: u64,
}

impl Model {
    /// Initial snapshot plus the command that starts the tick chain.
    pub fn init(config: &HeroConfig) -> Result<(Self, Command)> {
        let model = Self {
            title: config.title.clone(),
            hero: HeroState::from_config(config)?,
            menu: MenuState::new(config.menu_items.clone())?,
            viewport: Viewport::default(),
            ready: false,
            debug: KEY_HELP.to_string(),
            tick_delay: config.tick_delay,
            ticks: 0,
        };
        let command = Command::Tick(model.tick_delay);
        Ok((model, command))
    }

    pub fn diagnostics(&self) -> String {
        format!(
            "word {}/{} · {} · {}",
            self.hero.word_index() + 1,
            self.hero.words().len(),
            self.hero.phase().label(),
            self.menu.selected_label(),
        )
    }
}
