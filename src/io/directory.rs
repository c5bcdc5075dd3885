use crate::entry::DirectoryEntry;
use crate::error::{io_err, FsError};
use std::fs;
use std::path::{Path, PathBuf};

/// Names in `path`, ascending.
pub fn list_entries(path: &Path) -> Result<Vec<String>, FsError> {
    Ok(read_sorted(path)?.into_iter().map(|(name, _)| name).collect())
}

/// Same names and order as [`list_entries`], with metadata for display.
pub fn list_directory(path: &Path) -> Result<Vec<DirectoryEntry>, FsError> {
    Ok(read_sorted(path)?
        .into_iter()
        .filter_map(|(_, entry_path)| DirectoryEntry::from_path(entry_path))
        .collect())
}

/// (display name, on-disk path) pairs sorted by display name. The display name
/// is lossy for non-UTF-8 names, so files are always addressed by the path.
fn read_sorted(path: &Path) -> Result<Vec<(String, PathBuf)>, FsError> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(path).map_err(io_err("list", path))? {
        let entry = entry.map_err(io_err("list", path))?;
        entries.push((entry.file_name().to_string_lossy().to_string(), entry.path()));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    tracing::debug!(path = %path.display(), count = entries.len(), "listed directory");
    Ok(entries)
}

/// Entries of `path` whose name contains `query`, ignoring case. An empty
/// query matches everything.
pub fn search_by_name(path: &Path, query: &str) -> Result<Vec<String>, FsError> {
    let needle = query.to_lowercase();
    Ok(list_entries(path)?
        .into_iter()
        .filter(|name| matches_query(name, &needle))
        .collect())
}

pub fn search_directory(path: &Path, query: &str) -> Result<Vec<DirectoryEntry>, FsError> {
    let needle = query.to_lowercase();
    Ok(list_directory(path)?
        .into_iter()
        .filter(|entry| matches_query(&entry.name, &needle))
        .collect())
}

fn matches_query(name: &str, lowered_query: &str) -> bool {
    name.to_lowercase().contains(lowered_query)
}

pub fn is_directory(path: &Path) -> bool {
    path.is_dir()
}

/// `None` at a filesystem root.
pub fn parent_of(path: &Path) -> Option<PathBuf> {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
}
