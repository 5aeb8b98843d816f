//! Shell session state and the execute entry point

use crate::ast::Operation;
use crate::error::ShellResult;
use crate::eval::ExecContext;
use crate::fs::Filesystem;
use crate::help::format_help;
use crate::{lexer, parser};
use std::path::{Path, PathBuf};
use tracing::debug;

/// One interactive session. The working directory is an explicit field,
/// never the process-wide one, so `cd` in a session has no effect outside
/// it.
pub struct Shell {
    pub cwd: PathBuf,
    home: Option<PathBuf>,
    fs: Box<dyn Filesystem>,
}

impl Shell {
    /// Create a session rooted at `cwd`. `HOME` is read once, here.
    pub fn new(fs: Box<dyn Filesystem>, cwd: PathBuf) -> Self {
        Self {
            cwd,
            home: std::env::var_os("HOME").map(PathBuf::from),
            fs,
        }
    }

    /// Override the home directory (tests, or a host without `HOME`).
    #[must_use]
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub(crate) fn fs(&self) -> &dyn Filesystem {
        self.fs.as_ref()
    }

    pub(crate) fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// Resolve a path as typed against the session working directory.
    pub(crate) fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// Execute one line of input. Diagnostics (unknown command, usage,
    /// option conflicts) are printed to the context's output sink and
    /// yield exit code 1; only sink failures are returned as errors.
    pub fn execute(&mut self, line: &str, ctx: &mut ExecContext) -> ShellResult<i32> {
        let tokens = lexer::tokenize(line);
        let op = match parser::resolve(&tokens) {
            Ok(Some(op)) => op,
            Ok(None) => return Ok(0),
            Err(err) if err.is_diagnostic() => {
                ctx.stdout.writeln(&err.to_string())?;
                return Ok(1);
            }
            Err(err) => return Err(err),
        };
        debug!(?op, "resolved operation");
        self.execute_op(&op, ctx)
    }

    /// Execute an already-resolved operation.
    pub fn execute_op(&mut self, op: &Operation, ctx: &mut ExecContext) -> ShellResult<i32> {
        match op {
            Operation::Cd(req) => self.cmd_cd(req, ctx),
            Operation::Ls(req) => self.cmd_ls(req, ctx),
            Operation::Mv(req) => self.cmd_mv(req, ctx),
            Operation::Rm(req) => self.cmd_rm(req, ctx),
            Operation::Cp(req) => self.cmd_cp(req, ctx),
            Operation::Help(cmd) => {
                ctx.stdout.write(format_help(cmd).as_bytes())?;
                Ok(0)
            }
        }
    }
}
