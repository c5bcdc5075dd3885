#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum AppMode {
    #[default]
    Normal,
    Rename,
    DeleteConfirm,
}
