// Navigation state - current location and the listing on display
use crate::entry::DirectoryEntry;
use crate::error::FsError;
use crate::io;
use std::path::{Path, PathBuf};

pub struct NavigationState {
    pub current_path: PathBuf,
    /// Entries from the last listing (or search) of `current_path`.
    pub entries: Vec<DirectoryEntry>,
    pub selected_index: Option<usize>,
    /// Query the displayed entries were filtered by, if any.
    pub active_search: Option<String>,
}

impl NavigationState {
    pub fn new(start_path: PathBuf) -> Self {
        Self {
            current_path: start_path,
            entries: Vec::new(),
            selected_index: None,
            active_search: None,
        }
    }

    /// Re-list `current_path` from scratch. On failure the listing stays empty.
    pub fn refresh(&mut self) -> Result<(), FsError> {
        self.entries.clear();
        self.selected_index = None;
        self.active_search = None;
        tracing::info!(path = %self.current_path.display(), "listing");
        self.entries = io::list_directory(&self.current_path)?;
        Ok(())
    }

    /// Make `path` current. Non-directories are rejected without touching state.
    pub fn enter(&mut self, path: &Path) -> Result<(), FsError> {
        if !io::is_directory(path) {
            return Err(FsError::NotADirectory {
                path: path.to_path_buf(),
            });
        }
        tracing::info!(path = %path.display(), "entering directory");
        self.current_path = path.to_path_buf();
        self.refresh()
    }

    /// Move to the parent directory. Returns `Ok(false)` at a filesystem root,
    /// where nothing changes.
    pub fn up(&mut self) -> Result<bool, FsError> {
        let Some(parent) = io::parent_of(&self.current_path) else {
            tracing::debug!(path = %self.current_path.display(), "already at root");
            return Ok(false);
        };
        tracing::info!(path = %parent.display(), "going up");
        self.current_path = parent;
        self.refresh()?;
        Ok(true)
    }

    /// Replace the listing with the entries whose name contains `query`.
    pub fn search(&mut self, query: &str) -> Result<(), FsError> {
        self.entries.clear();
        self.selected_index = None;
        tracing::info!(path = %self.current_path.display(), query, "searching");
        self.active_search = Some(query.to_string());
        self.entries = io::search_directory(&self.current_path, query)?;
        Ok(())
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.selected_index = Some(index);
            true
        } else {
            false
        }
    }

    /// Move the selection by `delta`, clamped to the listing.
    pub fn select_delta(&mut self, delta: i32) {
        if self.entries.is_empty() {
            return;
        }
        let max = self.entries.len() - 1;
        let next = match self.selected_index {
            Some(current) if delta < 0 => current.saturating_sub(delta.unsigned_abs() as usize),
            Some(current) => (current + delta as usize).min(max),
            None => 0,
        };
        self.selected_index = Some(next);
    }

    pub fn selected_entry(&self) -> Option<&DirectoryEntry> {
        self.selected_index.and_then(|idx| self.entries.get(idx))
    }

    pub fn entry_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }
}
