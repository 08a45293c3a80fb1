pub mod hero;
pub mod menu;
pub mod moon;
pub mod viewport;
