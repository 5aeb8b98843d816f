//! Execution context for resolved operations
//!
//! Console output goes through an [`Output`] sink and y/n confirmations
//! come from an [`Input`] source, so tests can script a whole session
//! without touching the process stdio.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

mod builtins;

pub enum Output {
    Stdout,
    Buffer(Vec<u8>),
}

impl Output {
    pub fn write(&mut self, data: &[u8]) -> io::Result<()> {
        match self {
            Self::Stdout => {
                io::stdout().write_all(data)?;
                io::stdout().flush()
            }
            Self::Buffer(buf) => {
                buf.extend_from_slice(data);
                Ok(())
            }
        }
    }

    pub fn writeln(&mut self, s: &str) -> io::Result<()> {
        self.write(s.as_bytes())?;
        self.write(b"\n")
    }
}

/// Where confirmation replies come from.
pub enum Input {
    Stdin,
    Scripted(VecDeque<String>),
}

impl Input {
    /// Read one reply line. A scripted source that runs out of replies
    /// answers with an empty line, which every prompt treats as "no".
    pub fn read_reply(&mut self) -> io::Result<String> {
        match self {
            Self::Stdin => {
                let mut line = String::new();
                io::stdin().lock().read_line(&mut line)?;
                Ok(line.trim_end_matches(['\r', '\n']).to_string())
            }
            Self::Scripted(replies) => Ok(replies.pop_front().unwrap_or_default()),
        }
    }
}

pub struct ExecContext {
    pub stdout: Output,
    pub input: Input,
}

impl Default for ExecContext {
    fn default() -> Self {
        Self {
            stdout: Output::Stdout,
            input: Input::Stdin,
        }
    }
}

impl ExecContext {
    /// A context that captures output and answers prompts from a script.
    pub fn captured<I>(replies: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            stdout: Output::Buffer(Vec::new()),
            input: Input::Scripted(replies.into_iter().map(Into::into).collect()),
        }
    }

    /// The captured output so far, for assertions.
    pub fn output(&self) -> &str {
        match &self.stdout {
            Output::Stdout => "",
            Output::Buffer(buf) => std::str::from_utf8(buf).unwrap_or(""),
        }
    }
}
