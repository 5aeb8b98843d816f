//! Resolved operations
//!
//! This module defines the tagged variants produced by the per-command
//! resolvers: a validated, option-checked description of exactly one
//! filesystem action, ready for execution. Paths are carried exactly as
//! typed and resolved against the session working directory only at
//! execution time.

use crate::help::CommandHelp;

/// A resolved operation, one variant per command plus help output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Cd(CdRequest),
    Ls(LsRequest),
    Mv(MvRequest),
    Rm(RmRequest),
    Cp(CpRequest),
    /// `--help` was requested; print the command's help text
    Help(&'static CommandHelp),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdRequest {
    pub target: CdTarget,
}

/// Where `cd` should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CdTarget {
    /// Bare `~`: the HOME directory
    Home,
    /// `~/<user>`: the named user's home under `/home`
    UserHome(String),
    /// `.`: stay in the current directory
    Stay,
    /// Anything else: a relative or absolute path
    Path(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LsRequest {
    pub long: bool,
    /// Reverse the enumeration order. Accepted but without effect in
    /// recursive mode.
    pub reverse: bool,
    pub recursive: bool,
    pub target: LsTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LsTarget {
    /// Default: the session working directory
    Cwd,
    /// `~`: the HOME directory
    Home,
    /// `../`: the parent of the working directory
    Parent,
    Path(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MvRequest {
    /// `-i`: confirm before overwriting an existing destination file
    pub interactive: bool,
    /// `*`: source is a directory; move each immediate child into the
    /// destination
    pub wildcard: bool,
    /// `--suffix`: rename an existing destination file to
    /// `<stem>_backup<ext>` before moving
    pub suffix_backup: bool,
    /// `-u`: skip the move when a same-named destination file exists
    pub skip_existing: bool,
    pub source: String,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RmRequest {
    pub mode: RmMode,
    pub target: String,
}

/// The five mutually exclusive `rm` execution modes, selected at resolve
/// time by priority: force-recursive > recursive > force > interactive >
/// plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RmMode {
    /// `-rf` (a single combined flag, not `-r` plus `-f`)
    ForceRecursive,
    /// `-r` or `-R`
    Recursive,
    /// `-f`
    Force,
    /// `-i`
    Interactive,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpRequest {
    pub copy_contents: bool,
    /// `-d`: follow symlinks; selects the single non-recursive copy call
    pub dereference: bool,
    /// `--link`/`-l`: hard-link instead of copying (dereference branch only)
    pub hard_link: bool,
    pub recursive: bool,
    pub source: String,
    pub destination: String,
}
