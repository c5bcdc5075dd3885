use crate::error::{io_err, FsError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Delete a file, or a whole directory tree. Not atomic: an interrupted tree
/// removal leaves whatever was not reached yet.
pub fn remove_entry(path: &Path, is_dir: bool) -> Result<(), FsError> {
    tracing::info!(path = %path.display(), is_dir, "deleting");
    if is_dir {
        fs::remove_dir_all(path).map_err(io_err("delete", path))
    } else {
        fs::remove_file(path).map_err(io_err("delete", path))
    }
}

/// Rename `old_path` to `new_path`. Refuses to replace an existing entry.
pub fn rename_entry(old_path: &Path, new_path: &Path) -> Result<(), FsError> {
    ensure_vacant(new_path)?;
    tracing::info!(from = %old_path.display(), to = %new_path.display(), "renaming");
    fs::rename(old_path, new_path).map_err(io_err("rename", old_path))
}

/// Copy `src` into `dest_dir` under its own name and return the new path.
pub fn copy_entry(src: &Path, dest_dir: &Path, is_dir: bool) -> Result<PathBuf, FsError> {
    let dest = destination_for(src, dest_dir)?;
    tracing::info!(from = %src.display(), to = %dest.display(), is_dir, "copying");

    if is_dir {
        // Compare resolved paths so a symlinked spelling of either side still counts.
        let real_src = fs::canonicalize(src).map_err(io_err("copy", src))?;
        let real_dest_dir = fs::canonicalize(dest_dir).map_err(io_err("copy", dest_dir))?;
        if real_dest_dir.starts_with(&real_src) {
            return Err(FsError::Io {
                op: "copy",
                path: src.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "cannot copy a directory into itself",
                ),
            });
        }
        copy_dir_recursive(src, &dest)?;
    } else {
        fs::copy(src, &dest).map_err(io_err("copy", src))?;
    }
    Ok(dest)
}

/// Relocate `src` into `dest_dir`. Uses a plain rename when both sides share a
/// filesystem, otherwise copies and then deletes the source.
pub fn move_entry(src: &Path, dest_dir: &Path) -> Result<PathBuf, FsError> {
    let dest = destination_for(src, dest_dir)?;
    let meta = fs::symlink_metadata(src).map_err(io_err("move", src))?;
    tracing::info!(from = %src.display(), to = %dest.display(), "moving");

    match fs::rename(src, &dest) {
        Ok(()) => Ok(dest),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            tracing::debug!("rename crossed filesystems, falling back to copy + delete");
            copy_then_remove(src, dest_dir, meta.is_dir())
        }
        Err(e) => Err(FsError::from_io("move", src, e)),
    }
}

/// Move without `rename(2)`: copy into `dest_dir`, then delete the source.
/// The source is kept when the copy fails.
fn copy_then_remove(src: &Path, dest_dir: &Path, is_dir: bool) -> Result<PathBuf, FsError> {
    let dest = copy_entry(src, dest_dir, is_dir)?;
    remove_entry(src, is_dir)?;
    Ok(dest)
}

/// Hand a file to the platform's default application.
pub fn open_in_system(path: &Path) -> Result<(), FsError> {
    tracing::info!(path = %path.display(), "opening with system default");
    open::that(path).map_err(io_err("open", path))
}

fn destination_for(src: &Path, dest_dir: &Path) -> Result<PathBuf, FsError> {
    if !dest_dir.is_dir() {
        return Err(FsError::NotADirectory {
            path: dest_dir.to_path_buf(),
        });
    }
    let name = src.file_name().ok_or_else(|| FsError::InvalidName {
        name: src.display().to_string(),
    })?;
    let dest = dest_dir.join(name);
    ensure_vacant(&dest)?;
    Ok(dest)
}

fn ensure_vacant(path: &Path) -> Result<(), FsError> {
    if fs::symlink_metadata(path).is_ok() {
        return Err(FsError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<(), FsError> {
    fs::create_dir(dest).map_err(io_err("create directory", dest))?;

    for entry in fs::read_dir(src).map_err(io_err("list", src))? {
        let entry = entry.map_err(io_err("list", src))?;
        let path = entry.path();
        let dest_path = dest.join(entry.file_name());
        let file_type = entry.file_type().map_err(io_err("stat", &path))?;

        if file_type.is_symlink() {
            copy_symlink(&path, &dest_path)?;
        } else if file_type.is_dir() {
            copy_dir_recursive(&path, &dest_path)?;
        } else {
            fs::copy(&path, &dest_path).map_err(io_err("copy", &path))?;
        }
    }

    Ok(())
}

#[cfg(unix)]
fn copy_symlink(link: &Path, dest: &Path) -> Result<(), FsError> {
    let target = fs::read_link(link).map_err(io_err("read link", link))?;
    std::os::unix::fs::symlink(&target, dest).map_err(io_err("create link", dest))
}

#[cfg(not(unix))]
fn copy_symlink(link: &Path, dest: &Path) -> Result<(), FsError> {
    if link.is_dir() {
        copy_dir_recursive(link, dest)
    } else {
        fs::copy(link, dest).map_err(io_err("copy", link)).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::list_entries;
    use tempfile::TempDir;

    fn tree(root: &Path) -> PathBuf {
        let dir = root.join("project");
        fs::create_dir_all(dir.join("src/nested")).unwrap();
        fs::write(dir.join("README.md"), b"# readme").unwrap();
        fs::write(dir.join("src/main.rs"), b"fn main() {}").unwrap();
        fs::write(dir.join("src/nested/deep.txt"), b"deep").unwrap();
        dir
    }

    #[test]
    fn test_remove_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), b"a").unwrap();
        fs::create_dir(tmp.path().join("b")).unwrap();

        remove_entry(&tmp.path().join("a.txt"), false).unwrap();
        assert_eq!(list_entries(tmp.path()).unwrap(), vec!["b"]);
    }

    #[test]
    fn test_remove_tree() {
        let tmp = TempDir::new().unwrap();
        let dir = tree(tmp.path());

        remove_entry(&dir, true).unwrap();
        assert!(list_entries(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_remove_missing() {
        let tmp = TempDir::new().unwrap();
        let err = remove_entry(&tmp.path().join("ghost"), false).unwrap_err();
        assert!(matches!(err, FsError::NotFound { .. }));
    }

    #[test]
    fn test_rename() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("old.txt"), b"content").unwrap();

        rename_entry(&tmp.path().join("old.txt"), &tmp.path().join("new.txt")).unwrap();
        assert_eq!(list_entries(tmp.path()).unwrap(), vec!["new.txt"]);
        assert_eq!(fs::read(tmp.path().join("new.txt")).unwrap(), b"content");
    }

    #[test]
    fn test_rename_refuses_collision() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a"), b"first").unwrap();
        fs::write(tmp.path().join("b"), b"second").unwrap();

        let err = rename_entry(&tmp.path().join("a"), &tmp.path().join("b")).unwrap_err();
        assert!(matches!(err, FsError::AlreadyExists { .. }));
        assert_eq!(fs::read(tmp.path().join("b")).unwrap(), b"second");
        assert_eq!(list_entries(tmp.path()).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_copy_file() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        let dest_dir = tmp.path().join("dest");
        fs::write(&src, b"payload").unwrap();
        fs::create_dir(&dest_dir).unwrap();

        let copied = copy_entry(&src, &dest_dir, false).unwrap();
        assert_eq!(copied, dest_dir.join("a.txt"));
        assert_eq!(fs::read(&copied).unwrap(), b"payload");
        assert_eq!(fs::read(&src).unwrap(), b"payload");
    }

    #[test]
    fn test_copy_tree() {
        let tmp = TempDir::new().unwrap();
        let src = tree(tmp.path());
        let dest_dir = tmp.path().join("backup");
        fs::create_dir(&dest_dir).unwrap();

        let copied = copy_entry(&src, &dest_dir, true).unwrap();
        assert_eq!(
            fs::read(copied.join("src/nested/deep.txt")).unwrap(),
            b"deep"
        );
        assert_eq!(
            list_entries(&copied).unwrap(),
            list_entries(&src).unwrap()
        );
        assert!(src.join("src/main.rs").exists());
    }

    #[test]
    fn test_copy_refuses_collision() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        let dest_dir = tmp.path().join("dest");
        fs::write(&src, b"new").unwrap();
        fs::create_dir(&dest_dir).unwrap();
        fs::write(dest_dir.join("a.txt"), b"old").unwrap();

        let err = copy_entry(&src, &dest_dir, false).unwrap_err();
        assert!(matches!(err, FsError::AlreadyExists { .. }));
        assert_eq!(fs::read(dest_dir.join("a.txt")).unwrap(), b"old");
    }

    #[test]
    fn test_copy_into_non_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), b"a").unwrap();
        fs::write(tmp.path().join("plain"), b"").unwrap();

        let err = copy_entry(&tmp.path().join("a.txt"), &tmp.path().join("plain"), false)
            .unwrap_err();
        assert!(matches!(err, FsError::NotADirectory { .. }));
    }

    #[test]
    fn test_copy_directory_into_itself() {
        let tmp = TempDir::new().unwrap();
        let src = tree(tmp.path());

        let err = copy_entry(&src, &src.join("src"), true).unwrap_err();
        assert!(matches!(err, FsError::Io { op: "copy", .. }));
        assert!(!src.join("src/project").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_directory_into_itself_through_symlink() {
        let tmp = TempDir::new().unwrap();
        let real = tmp.path().join("real");
        fs::create_dir_all(real.join("src/inner")).unwrap();
        fs::write(real.join("src/f.txt"), b"f").unwrap();
        std::os::unix::fs::symlink(&real, tmp.path().join("link")).unwrap();

        let err = copy_entry(
            &tmp.path().join("link/src"),
            &real.join("src/inner"),
            true,
        )
        .unwrap_err();
        assert!(matches!(err, FsError::Io { op: "copy", .. }));
        assert!(list_entries(&real.join("src/inner")).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_tree_keeps_symlinks() {
        let tmp = TempDir::new().unwrap();
        let src = tree(tmp.path());
        std::os::unix::fs::symlink("README.md", src.join("link")).unwrap();
        let dest_dir = tmp.path().join("out");
        fs::create_dir(&dest_dir).unwrap();

        let copied = copy_entry(&src, &dest_dir, true).unwrap();
        assert_eq!(
            fs::read_link(copied.join("link")).unwrap(),
            PathBuf::from("README.md")
        );
    }

    #[test]
    fn test_move_file() {
        let tmp = TempDir::new().unwrap();
        let src_dir = tmp.path().join("from");
        let dest_dir = tmp.path().join("to");
        fs::create_dir(&src_dir).unwrap();
        fs::create_dir(&dest_dir).unwrap();
        fs::write(src_dir.join("a.txt"), b"moving").unwrap();

        let moved = move_entry(&src_dir.join("a.txt"), &dest_dir).unwrap();
        assert_eq!(moved, dest_dir.join("a.txt"));
        assert!(list_entries(&src_dir).unwrap().is_empty());
        assert_eq!(list_entries(&dest_dir).unwrap(), vec!["a.txt"]);
        assert_eq!(fs::read(&moved).unwrap(), b"moving");
    }

    #[test]
    fn test_move_tree() {
        let tmp = TempDir::new().unwrap();
        let src = tree(tmp.path());
        let dest_dir = tmp.path().join("archive");
        fs::create_dir(&dest_dir).unwrap();

        let moved = move_entry(&src, &dest_dir).unwrap();
        assert!(!src.exists());
        assert_eq!(fs::read(moved.join("README.md")).unwrap(), b"# readme");
    }

    #[test]
    fn test_move_refuses_collision() {
        let tmp = TempDir::new().unwrap();
        let dest_dir = tmp.path().join("to");
        fs::create_dir(&dest_dir).unwrap();
        fs::write(tmp.path().join("a.txt"), b"mine").unwrap();
        fs::write(dest_dir.join("a.txt"), b"theirs").unwrap();

        let err = move_entry(&tmp.path().join("a.txt"), &dest_dir).unwrap_err();
        assert!(matches!(err, FsError::AlreadyExists { .. }));
        assert_eq!(fs::read(tmp.path().join("a.txt")).unwrap(), b"mine");
        assert_eq!(fs::read(dest_dir.join("a.txt")).unwrap(), b"theirs");
    }

    #[test]
    fn test_copy_then_remove_moves_tree() {
        let tmp = TempDir::new().unwrap();
        let src = tree(tmp.path());
        let dest_dir = tmp.path().join("elsewhere");
        fs::create_dir(&dest_dir).unwrap();

        let moved = copy_then_remove(&src, &dest_dir, true).unwrap();
        assert_eq!(moved, dest_dir.join("project"));
        assert!(!src.exists());
        assert_eq!(fs::read(moved.join("src/nested/deep.txt")).unwrap(), b"deep");
        assert_eq!(list_entries(tmp.path()).unwrap(), vec!["elsewhere"]);
    }

    #[test]
    fn test_copy_then_remove_keeps_source_on_collision() {
        let tmp = TempDir::new().unwrap();
        let dest_dir = tmp.path().join("to");
        fs::create_dir(&dest_dir).unwrap();
        fs::write(tmp.path().join("a.txt"), b"mine").unwrap();
        fs::write(dest_dir.join("a.txt"), b"theirs").unwrap();

        let err = copy_then_remove(&tmp.path().join("a.txt"), &dest_dir, false).unwrap_err();
        assert!(matches!(err, FsError::AlreadyExists { .. }));
        assert_eq!(fs::read(tmp.path().join("a.txt")).unwrap(), b"mine");
    }

    #[test]
    fn test_move_missing_source() {
        let tmp = TempDir::new().unwrap();
        let err = move_entry(&tmp.path().join("ghost"), tmp.path()).unwrap_err();
        assert!(matches!(err, FsError::NotFound { .. }));
    }
}
