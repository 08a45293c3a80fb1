pub mod state;

pub use state::{MoonIntent, MoonState, MoonStateMachine};
