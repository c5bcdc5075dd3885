use std::path::PathBuf;

/// One user event, handed to [`crate::app::Tansu::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    OpenFolder(PathBuf),
    Up,
    Refresh,
    Select(usize),
    SelectDelta(i32),
    /// Double-click / Enter: enter a directory, open a file
    Activate(usize),

    // File operations
    RequestDelete,
    ConfirmDelete,
    RequestRename,
    Rename(String),
    Copy(PathBuf),
    Move(PathBuf),

    // Search
    Search(String),

    CancelPrompt,
}
