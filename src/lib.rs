//! myshell - Interactive filesystem shell
//!
//! This crate provides:
//! - A line-oriented shell with five commands (cd, ls, mv, rm, cp)
//! - Session-local working directory state, never the process-wide one
//! - Per-command option resolution with usage and conflict diagnostics
//! - A filesystem trait seam so sessions run against any backing store

pub mod ast;
pub mod config;
pub mod error;
pub mod eval;
pub mod fs;
pub mod help;
pub mod lexer;
pub mod parser;
pub mod shell;

pub use error::{ShellError, ShellResult};
pub use eval::{ExecContext, Input, Output};
pub use parser::resolve;
pub use shell::Shell;
