use thiserror::Error;

/// Precondition violations caught while building the initial state.
///
/// None of these can happen once a state has been constructed; the state
/// machines are total over everything they accept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("hero word list must not be empty")]
    EmptyWords,

    #[error("hero word {index} is empty")]
    EmptyWord { index: usize },

    #[error("menu must have at least one item")]
    EmptyMenu,

    #[error("animation needs at least one frame")]
    EmptyFrames,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
