use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Tab completion against the session working directory: command names in
/// the first word position, local paths everywhere.
pub struct ShellHelper {
    pub cwd: Arc<RwLock<PathBuf>>,
}

impl ShellHelper {
    pub fn new(cwd: Arc<RwLock<PathBuf>>) -> Self {
        Self { cwd }
    }
}

const COMMANDS: &[&str] = &["cd", "cp", "exit", "ls", "mv", "rm"];

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_cursor = &line[..pos];
        let (start, word) = find_word_start(line_to_cursor);

        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let is_first_word = !line_to_cursor[..start].contains(|c: char| !c.is_whitespace());

        let mut completions = Vec::new();

        if is_first_word {
            for &command in COMMANDS {
                if command.starts_with(word) {
                    completions.push(Pair {
                        display: command.to_string(),
                        replacement: command.to_string(),
                    });
                }
            }
            return Ok((start, completions));
        }

        let cwd = self.cwd.read().unwrap_or_else(std::sync::PoisonError::into_inner).clone();

        let (dir, partial) = match word.rfind('/') {
            Some(last_slash) => (
                resolve_path(&cwd, &word[..=last_slash]),
                &word[last_slash + 1..],
            ),
            None => (cwd, word),
        };

        if let Ok(entries) = std::fs::read_dir(&dir) {
            for entry in entries.flatten() {
                let name = entry.file_name().to_string_lossy().to_string();
                if name.starts_with(partial) {
                    let is_dir = entry.file_type().is_ok_and(|ft| ft.is_dir());
                    let display = if is_dir { format!("{name}/") } else { name };
                    let replacement = match word.rfind('/') {
                        Some(last_slash) => format!("{}{}", &word[..=last_slash], display),
                        None => display.clone(),
                    };
                    completions.push(Pair {
                        display,
                        replacement,
                    });
                }
            }
        }

        Ok((start, completions))
    }
}

fn find_word_start(line: &str) -> (usize, &str) {
    let mut start = line.len();
    for (i, c) in line.char_indices().rev() {
        if c.is_whitespace() {
            break;
        }
        start = i;
    }
    (start, &line[start..])
}

fn resolve_path(cwd: &Path, dir: &str) -> PathBuf {
    let dir = Path::new(dir);
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        cwd.join(dir)
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for ShellHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Borrowed(hint)
    }
}

impl Validator for ShellHelper {}

impl Helper for ShellHelper {}
