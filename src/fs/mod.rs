//! Filesystem collaborator interface
//!
//! The executor talks to the host filesystem through this trait so the
//! session state stays testable without touching the process-wide working
//! directory. [`LocalFs`] is the production implementation.

use bitflags::bitflags;
use std::io;
use std::path::{Path, PathBuf};

mod local;

pub use local::LocalFs;

bitflags! {
    /// Option set for [`Filesystem::copy`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CopyOptions: u32 {
        /// Copy directory trees in full
        const RECURSIVE         = 1 << 0;
        /// A symlink source is a silent no-op
        const SKIP_SYMLINKS     = 1 << 1;
        /// Hard-link regular files instead of copying
        const CREATE_HARD_LINKS = 1 << 2;
    }
}

/// What kind of entry a path names, for the long-format type indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Dir,
    Symlink,
    Other,
}

impl FileKind {
    pub const fn indicator(self) -> char {
        match self {
            Self::File => '-',
            Self::Dir => 'd',
            Self::Symlink => 'l',
            Self::Other => '?',
        }
    }
}

/// Metadata for a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    pub kind: FileKind,
    /// Permission bits (the low nine are rendered in long format)
    pub mode: u32,
}

/// The host filesystem operations the shell needs.
pub trait Filesystem {
    /// Stat following symlinks.
    fn stat(&self, path: &Path) -> io::Result<FileInfo>;

    /// Stat without following symlinks, so a symlink reports
    /// [`FileKind::Symlink`] and a broken link still stats.
    fn symlink_stat(&self, path: &Path) -> io::Result<FileInfo>;

    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Immediate children in the order the host API yields them. Not
    /// sorted.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Atomic rename within a volume; cross-volume behavior is whatever
    /// the host provides.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Copy `from` to `to` under the given option set. See [`LocalFs`] for
    /// the exact per-kind semantics.
    fn copy(&self, from: &Path, to: &Path, options: CopyOptions) -> io::Result<()>;

    /// Remove a single file or an empty directory.
    fn remove(&self, path: &Path) -> io::Result<()>;

    /// Remove a file or a directory tree.
    fn remove_all(&self, path: &Path) -> io::Result<()>;
}
