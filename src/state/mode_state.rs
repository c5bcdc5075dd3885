// Mode state - which modal is open and its input buffer
use crate::state::AppMode;

pub struct ModeState {
    pub mode: AppMode,
    pub input_buffer: String,
    pub focus_input: bool,
}

impl ModeState {
    pub fn new() -> Self {
        Self {
            mode: AppMode::Normal,
            input_buffer: String::new(),
            focus_input: false,
        }
    }

    pub fn set_mode(&mut self, mode: AppMode) {
        self.mode = mode;
    }

    /// Open the rename prompt pre-filled with `current_name`.
    pub fn begin_rename(&mut self, current_name: &str) {
        self.input_buffer = current_name.to_string();
        self.mode = AppMode::Rename;
        self.focus_input = true;
    }

    pub fn reset(&mut self) {
        self.mode = AppMode::Normal;
        self.input_buffer.clear();
        self.focus_input = false;
    }
}
