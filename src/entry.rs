use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

/// One row of a directory listing. Built fresh on every listing, never cached.
#[derive(Clone, Debug)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    pub is_symlink: bool,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

impl DirectoryEntry {
    /// Inspect `path` on disk. Broken symlinks still produce an entry so the
    /// listing matches what the directory actually contains.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_string();
        let symlink_meta = fs::symlink_metadata(&path).ok();
        let is_symlink = symlink_meta
            .as_ref()
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false);

        let metadata = fs::metadata(&path).ok().or(symlink_meta);
        let is_dir = metadata.as_ref().map(|m| m.is_dir()).unwrap_or(false);
        let size = metadata.as_ref().map(|m| m.len()).unwrap_or(0);
        let modified = metadata.as_ref().and_then(|m| m.modified().ok());

        Some(Self {
            path,
            name,
            is_dir,
            is_symlink,
            size,
            modified,
        })
    }

    pub fn get_icon(&self) -> &'static str {
        if self.is_dir {
            "📁"
        } else {
            "📄"
        }
    }

    pub fn display_name(&self) -> String {
        if self.is_symlink {
            format!("{} \u{2192}", self.name)
        } else {
            self.name.clone()
        }
    }

    /// "Directory | 4.0 KB | Modified: 2026-01-01 12:00" for the status bar.
    pub fn summary(&self) -> String {
        let kind = if self.is_dir { "Directory" } else { "File" };
        let modified = self
            .modified
            .map(|m| {
                chrono::DateTime::<chrono::Local>::from(m)
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
            })
            .unwrap_or_else(|| "unknown".to_string());
        format!(
            "{} | {} | Modified: {}",
            kind,
            bytesize::ByteSize(self.size),
            modified
        )
    }
}
