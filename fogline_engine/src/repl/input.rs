//! Terminal input handling for the Fogline REPL.
//!
//! Wraps rustyline configuration and command-word completion, with a plain
//! stdin fallback when no terminal is attached.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

use crate::resolve::CodeEntry;

/// Outcome of reading a line from the REPL input.
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

const COMMAND_TERMS: &[&str] = &[
    "back", "choose", "exit", "help", "inventory", "look", "quit", "restart", "try again", "use",
];

const DEV_COMMANDS: &[&str] = &[":item", ":port", ":spawn", ":teleport"];

type ReplEditor = rustyline::Editor<FoglineHelper, DefaultHistory>;

#[derive(Default)]
struct FoglineHelper;

impl Helper for FoglineHelper {}

impl Completer for FoglineHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_prefix(line, pos);
        if prefix.is_empty() {
            return Ok((start, Vec::new()));
        }
        let lower = prefix.to_lowercase();
        let pairs = command_terms()
            .filter(|term| term.starts_with(&lower))
            .map(|term| Pair {
                display: term.to_string(),
                replacement: term.to_string(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for FoglineHelper {
    type Hint = String;
}

impl Highlighter for FoglineHelper {}

impl Validator for FoglineHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}

fn current_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start_matches(char::is_whitespace);
    let start = pos - trimmed.len();
    (start, trimmed.to_string())
}

fn command_terms() -> impl Iterator<Item = &'static str> {
    let dev: &[&str] = if crate::DEV_MODE { DEV_COMMANDS } else { &[] };
    COMMAND_TERMS.iter().chain(dev.iter()).copied()
}

/// Helper responsible for managing the interactive input backend.
///
/// Prefers `rustyline` when an interactive terminal is available, falling back to
/// a basic stdin reader otherwise.
pub struct InputManager {
    backend: Backend,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        let backend = if io::stdin().is_terminal() {
            match RustylineInput::new() {
                Ok(editor) => {
                    info!("using rustyline-backed REPL input");
                    Backend::Rustyline(Box::new(editor))
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    Backend::plain()
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::plain()
        };

        Self { backend }
    }

    /// Read a line from the current backend. If the interactive backend reports an
    /// unrecoverable error, switch to the plain stdin backend and retry once.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        self.read_with(prompt, HistoryMode::Record)
    }

    fn read_with(&mut self, prompt: &str, mode: HistoryMode) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt, mode) {
            Ok(event) => Ok(event),
            Err(err) => {
                if self.backend.is_rustyline() {
                    warn!("rustyline input failed: {err} -- switching to basic stdin");
                    self.backend = Backend::plain();
                    self.backend.read_line(prompt, mode)
                } else {
                    Err(err)
                }
            },
        }
    }
}

/// Whether a line read from the terminal goes into the history file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    Record,
    /// Keypad codes stay out of history.
    Skip,
}

impl HistoryMode {
    fn records(self, line: &str) -> bool {
        self == HistoryMode::Record && !line.trim().is_empty()
    }
}

/// The code door reads its one line through the same backend as the REPL.
impl CodeEntry for InputManager {
    fn read_code(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.read_with(&format!("{prompt} "), HistoryMode::Skip)? {
            InputEvent::Line(line) if !line.trim().is_empty() => Ok(Some(line)),
            InputEvent::Line(_) | InputEvent::Eof | InputEvent::Interrupted => Ok(None),
        }
    }
}

enum Backend {
    Rustyline(Box<RustylineInput>),
    Plain(StdinInput),
}

impl Backend {
    fn plain() -> Self {
        Backend::Plain(StdinInput::default())
    }

    fn is_rustyline(&self) -> bool {
        matches!(self, Backend::Rustyline(_))
    }

    fn read_line(&mut self, prompt: &str, mode: HistoryMode) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => editor.read_line(prompt, mode),
            Backend::Plain(stdin) => stdin.read_line(prompt),
        }
    }
}

struct RustylineInput {
    editor: ReplEditor,
    history_path: Option<PathBuf>,
}

impl RustylineInput {
    fn new() -> io::Result<Self> {
        let mut editor = ReplEditor::new().map_err(map_io_err)?;
        editor.set_helper(Some(FoglineHelper));
        let history_path = history_file_path();

        if let Some(path) = history_path.as_ref() {
            if let Some(dir) = path.parent()
                && let Err(err) = fs::create_dir_all(dir)
            {
                warn!("failed to create history directory {}: {err}", dir.display());
            }

            if let Err(err) = editor.load_history(path) {
                match err {
                    ReadlineError::Io(ref io_err) if io_err.kind() == io::ErrorKind::NotFound => {
                        info!("no prior history found at {}, starting fresh", path.display());
                    },
                    other => {
                        warn!("failed to load history from {}: {other}", path.display());
                    },
                }
            }
        }

        Ok(Self { editor, history_path })
    }

    fn read_line(&mut self, prompt: &str, mode: HistoryMode) -> io::Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if mode.records(&line) {
                    if let Err(err) = self.editor.add_history_entry(line.as_str()) {
                        warn!("failed to append to history: {err}");
                    }
                    if let Some(path) = self.history_path.as_ref()
                        && let Err(err) = self.editor.save_history(path)
                    {
                        warn!("failed to persist history to {}: {err}", path.display());
                    }
                }
                Ok(InputEvent::Line(line))
            },
            Err(err) => convert_readline_error(err),
        }
    }
}

#[derive(Default)]
struct StdinInput {
    buffer: String,
}

impl StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;

        self.buffer.clear();
        let bytes = io::stdin().read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(InputEvent::Eof);
        }

        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }

        Ok(InputEvent::Line(self.buffer.clone()))
    }
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

fn map_io_err(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::other(other),
    }
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| build_history_path(&base))
}

fn build_history_path(base: &Path) -> PathBuf {
    let mut path = base.to_path_buf();
    path.push("fogline_engine");
    path.push("history.txt");
    path
}
