pub mod state;
pub mod widget;

pub use state::{HeroEvent, HeroIntent, HeroState, HeroStateMachine, Phase};
