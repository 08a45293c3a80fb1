// src/ui/widgets/hero/state.rs
use serde::Serialize;

use crate::config::HeroConfig;
use crate::error::{ConfigError, Result};

/// Which way the typewriter is moving.
///
/// `blinks` only exists while holding; it counts cursor toggles since the
/// word finished typing and is always below the configured blink target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    Typing,
    Holding { blinks: u32 },
    Erasing,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Typing => "typing",
            Phase::Holding { .. } => "holding",
            Phase::Erasing => "erasing",
        }
    }

    fn same_kind(&self, other: &Phase) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroState {
    words: Vec<String>,
    word_index: usize,
    char_pos: usize,
    phase: Phase,
    cursor: String,
    blink_target: u32,
    display_text: String,
}

impl HeroState {
    /// Builds the initial state: first word, nothing typed yet.
    pub fn new(words: Vec<String>, cursor: impl Into<String>, blink_target: u32) -> Result<Self> {
        if words.is_empty() {
            return Err(ConfigError::EmptyWords);
        }
        if let Some(index) = words.iter().position(|w| w.is_empty()) {
            return Err(ConfigError::EmptyWord { index });
        }

        let mut state = Self {
            words,
            word_index: 0,
            char_pos: 0,
            phase: Phase::Typing,
            cursor: cursor.into(),
            blink_target,
            display_text: String::new(),
        };
        state.display_text = state.compose_display();
        Ok(state)
    }

    pub fn from_config(config: &HeroConfig) -> Result<Self> {
        Self::new(config.words.clone(), config.cursor.clone(), config.blink_target)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn char_pos(&self) -> usize {
        self.char_pos
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cursor(&self) -> &str {
        &self.cursor
    }

    pub fn blink_target(&self) -> u32 {
        self.blink_target
    }

    pub fn current_word(&self) -> &str {
        &self.words[self.word_index]
    }

    pub fn current_word_len(&self) -> usize {
        self.current_word().chars().count()
    }

    /// Current word cut at `char_pos`, without any cursor.
    pub fn visible_text(&self) -> &str {
        prefix(self.current_word(), self.char_pos)
    }

    /// Visibility follows the phase and blink count, never the rendered text,
    /// so a word that itself contains the cursor glyph still blinks.
    pub fn cursor_visible(&self) -> bool {
        match self.phase {
            Phase::Typing => true,
            Phase::Holding { blinks } => blinks % 2 == 0,
            // Nothing erased yet: keep whatever the last blink left on screen.
            Phase::Erasing => {
                self.char_pos < self.current_word_len() || self.blink_target % 2 == 0
            }
        }
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    fn compose_display(&self) -> String {
        let mut text = self.visible_text().to_string();
        if self.cursor_visible() {
            text.push_str(&self.cursor);
        }
        text
    }

    fn after_typing(&self) -> Phase {
        if self.blink_target == 0 {
            Phase::Erasing
        } else {
            Phase::Holding { blinks: 0 }
        }
    }
}

/// Leading `chars` characters of `word`, on a char boundary.
fn prefix(word: &str, chars: usize) -> &str {
    match word.char_indices().nth(chars) {
        Some((byte, _)) => &word[..byte],
        None => word,
    }
}

// ----------------------------------------------------------------------------
// INTENT - Messages that express what should happen
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroIntent {
    Tick,
}

// ----------------------------------------------------------------------------
// EVENTS - Things that happened (past tense)
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum HeroEvent {
    /// Position after the tick; the word list itself never changes.
    StateChanged { word_index: usize, char_pos: usize, phase: Phase },
    PhaseChanged { from: Phase, to: Phase },
    WordAdvanced { index: usize },
}

// ----------------------------------------------------------------------------
// STATE MACHINE - Pure function: (State, Intent) -> (State, Vec<Event>)
// ----------------------------------------------------------------------------

pub struct HeroStateMachine;

impl HeroStateMachine {
    pub fn transition(state: HeroState, intent: HeroIntent) -> (HeroState, Vec<HeroEvent>) {
        match intent {
            HeroIntent::Tick => Self::handle_tick(state),
        }
    }

    fn handle_tick(mut state: HeroState) -> (HeroState, Vec<HeroEvent>) {
        let before = state.phase;
        let mut events = Vec::new();
        let word_len = state.current_word_len();

        match state.phase {
            Phase::Typing => {
                if state.char_pos < word_len {
                    state.char_pos += 1;
                }
                if state.char_pos == word_len {
                    state.phase = state.after_typing();
                }
            }
            Phase::Holding { blinks } => {
                let blinks = blinks + 1;
                state.phase = if blinks >= state.blink_target {
                    Phase::Erasing
                } else {
                    Phase::Holding { blinks }
                };
            }
            Phase::Erasing => {
                state.char_pos = state.char_pos.saturating_sub(1);
                if state.char_pos == 0 {
                    state.phase = Phase::Typing;
                    state.word_index = (state.word_index + 1) % state.words.len();
                    events.push(HeroEvent::WordAdvanced { index: state.word_index });
                }
            }
        }

        state.display_text = state.compose_display();

        if !before.same_kind(&state.phase) {
            events.insert(0, HeroEvent::PhaseChanged { from: before, to: state.phase });
        }
        events.push(HeroEvent::StateChanged {
            word_index: state.word_index,
            char_pos: state.char_pos,
            phase: state.phase,
        });

        (state, events)
    }
}
