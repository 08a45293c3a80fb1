pub mod log;
pub mod terminal;
