// src/ui/widgets/moon/state.rs
use crate::config::MoonConfig;
use crate::error::{ConfigError, Result};

/// A looping frame animation, one frame per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoonState {
    frames: Vec<String>,
    current: usize,
}

impl MoonState {
    pub fn new(frames: Vec<String>) -> Result<Self> {
        if frames.is_empty() {
            return Err(ConfigError::EmptyFrames);
        }
        Ok(Self { frames, current: 0 })
    }

    pub fn from_config(config: &MoonConfig) -> Result<Self> {
        Self::new(config.frames.clone())
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn frame(&self) -> &str {
        &self.frames[self.current]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonIntent {
    Advance,
}

pub struct MoonStateMachine;

impl MoonStateMachine {
    pub fn transition(mut state: MoonState, intent: MoonIntent) -> MoonState {
        match intent {
            MoonIntent::Advance => {
                state.current = (state.current + 1) % state.frames.len();
                state
            }
        }
    }
}
