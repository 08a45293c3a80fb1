pub mod state;
pub mod widget;

pub use state::Viewport;
pub use widget::ViewportWidget;
