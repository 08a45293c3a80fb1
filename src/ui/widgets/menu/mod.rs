pub mod state;
pub mod widget;

pub use state::{MenuEvent, MenuIntent, MenuState, MenuStateMachine};
