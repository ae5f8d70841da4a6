use std::io::{self, BufRead, BufReader};

use rustyline::config::Config;
use rustyline::error::ReadlineError;
use rustyline::history::MemHistory;
use rustyline::Editor;

use crate::error::ShellError;

/// One read cycle's result.
#[derive(Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A complete line, without the terminating newline.
    Line(String),
    /// The line was cancelled at the prompt (Ctrl-C).
    Interrupted,
    /// End of the input stream.
    Eof,
}

/// Reads one line per call, either through a rustyline editor (terminal
/// stdin) or from a plain byte stream (piped stdin, tests).
pub struct LineReader {
    source: Source,
}

enum Source {
    Editor(Box<Editor<(), MemHistory>>),
    Stream(Box<dyn BufRead>),
}

impl LineReader {
    /// Editor-backed reader with line editing and in-memory history.
    /// Nothing is persisted to disk.
    pub fn interactive() -> Result<Self, ShellError> {
        let config = Config::builder().auto_add_history(true).build();
        let editor = Editor::with_history(config, MemHistory::new())?;
        Ok(Self {
            source: Source::Editor(Box::new(editor)),
        })
    }

    pub fn from_stream(stream: Box<dyn BufRead>) -> Self {
        Self {
            source: Source::Stream(stream),
        }
    }

    /// Picks the editor when stdin is a terminal, the raw stream otherwise,
    /// so `msh` also works at the end of a pipe.
    pub fn for_stdin() -> Result<Self, ShellError> {
        if stdin_is_tty() {
            Self::interactive()
        } else {
            Ok(Self::from_stream(Box::new(BufReader::new(io::stdin()))))
        }
    }

    pub fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        match &mut self.source {
            Source::Editor(editor) => match editor.readline(prompt) {
                Ok(line) => Ok(ReadOutcome::Line(line)),
                Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
                Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
                Err(e) => Err(e.into()),
            },
            Source::Stream(stream) => {
                let mut buf = Vec::new();
                let read = stream.read_until(b'\n', &mut buf)?;
                if read == 0 {
                    return Ok(ReadOutcome::Eof);
                }
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                    if buf.last() == Some(&b'\r') {
                        buf.pop();
                    }
                }
                Ok(ReadOutcome::Line(
                    String::from_utf8_lossy(&buf).into_owned(),
                ))
            }
        }
    }
}

fn stdin_is_tty() -> bool {
    // SAFETY: isatty only inspects the descriptor.
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}
