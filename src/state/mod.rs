mod mode;
mod mode_state;
mod navigation;
mod ui;

pub use mode::AppMode;
pub use mode_state::ModeState;
pub use navigation::NavigationState;
pub use ui::UIState;
