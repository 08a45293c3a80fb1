//! Animated hero banner with a horizontal menu, drawn in the terminal.
//!
//! Timer ticks, key presses and resizes all arrive as [`event::Event`]s and
//! go through [`app::update`], a pure function from one [`app::Model`]
//! snapshot to the next. Rendering is a pure function of the snapshot.

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod ui;
pub mod util;

pub use app::{App, Command, Model};
