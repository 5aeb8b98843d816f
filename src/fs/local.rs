use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use super::{CopyOptions, FileInfo, FileKind, Filesystem};

/// The real local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    fn info_from(path: &Path, metadata: &fs::Metadata) -> FileInfo {
        let name = path.file_name().map_or_else(
            || path.to_string_lossy().into_owned(),
            |n| n.to_string_lossy().into_owned(),
        );
        let ft = metadata.file_type();
        let kind = if ft.is_symlink() {
            FileKind::Symlink
        } else if ft.is_dir() {
            FileKind::Dir
        } else if ft.is_file() {
            FileKind::File
        } else {
            FileKind::Other
        };

        FileInfo {
            name,
            size: metadata.len(),
            kind,
            mode: metadata.permissions().mode(),
        }
    }
}

impl Filesystem for LocalFs {
    fn stat(&self, path: &Path) -> io::Result<FileInfo> {
        let metadata = fs::metadata(path)?;
        Ok(Self::info_from(path, &metadata))
    }

    fn symlink_stat(&self, path: &Path) -> io::Result<FileInfo> {
        let metadata = fs::symlink_metadata(path)?;
        Ok(Self::info_from(path, &metadata))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect()
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        path.canonicalize()
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn copy(&self, from: &Path, to: &Path, options: CopyOptions) -> io::Result<()> {
        let metadata = if options.contains(CopyOptions::SKIP_SYMLINKS) {
            fs::symlink_metadata(from)?
        } else {
            fs::metadata(from)?
        };
        let ft = metadata.file_type();

        if ft.is_symlink() {
            // Only reachable with SKIP_SYMLINKS: a symlink source is a no-op.
            return Ok(());
        }
        if ft.is_file() {
            return copy_regular(from, to, options);
        }
        if ft.is_dir() {
            if options.contains(CopyOptions::RECURSIVE) {
                return copy_tree(from, to);
            }
            if options.is_empty() {
                return copy_one_level(from, to);
            }
            // Directory source with any other option set does nothing.
            return Ok(());
        }

        Err(io::Error::other(format!(
            "cannot copy special file: {}",
            from.display()
        )))
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        if fs::metadata(path)?.is_dir() {
            fs::remove_dir(path)
        } else {
            fs::remove_file(path)
        }
    }

    fn remove_all(&self, path: &Path) -> io::Result<()> {
        if fs::metadata(path)?.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        }
    }
}

/// Copy one regular file. An existing `to` directory receives
/// `to/<basename>`; a plain copy onto an existing target is refused.
fn copy_regular(from: &Path, to: &Path, options: CopyOptions) -> io::Result<()> {
    let target = if to.is_dir() {
        let name = from.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid source path: {}", from.display()),
            )
        })?;
        to.join(name)
    } else {
        to.to_path_buf()
    };

    if options.contains(CopyOptions::CREATE_HARD_LINKS) {
        return fs::hard_link(from, &target);
    }
    if target.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("already exists: {}", target.display()),
        ));
    }
    fs::copy(from, &target).map(|_| ())
}

/// Non-recursive directory copy: create the target, copy immediate regular
/// files, skip subdirectories.
fn copy_one_level(from: &Path, to: &Path) -> io::Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let path = entry.path();
        if fs::metadata(&path)?.is_file() {
            copy_regular(&path, &to.join(entry.file_name()), CopyOptions::empty())?;
        }
    }
    Ok(())
}

fn copy_tree(from: &Path, to: &Path) -> io::Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let path = entry.path();
        let dest = to.join(entry.file_name());
        // Symlink entries are followed, so a broken link surfaces an error.
        if fs::metadata(&path)?.is_dir() {
            copy_tree(&path, &dest)?;
        } else {
            copy_regular(&path, &dest, CopyOptions::empty())?;
        }
    }
    Ok(())
}
