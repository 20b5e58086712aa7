use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::buffer::LineBuffer;
use crate::file;
use crate::input::{self, Command};
use crate::render;
use crate::term::{self, RawTerm};

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("terminal setup failed: {0}")]
    Terminal(io::Error),
    #[error("terminal read failed: {0}")]
    Read(io::Error),
    #[error("terminal write failed: {0}")]
    Write(io::Error),
}

/// One editing session: the raw-mode terminal, the document, and the path it
/// saves to. Dropping it (on any exit path) restores the terminal.
pub struct Editor {
    term: RawTerm,
    buffer: LineBuffer,
    path: PathBuf,
    #[allow(dead_code)]
    viewport: (u16, u16),
}

impl Editor {
    /// Enters raw mode and loads `path` into the buffer. The viewport is
    /// queried once; an unanswerable terminal gets a conventional 24x80.
    pub fn open(path: PathBuf) -> Result<Self, EditorError> {
        let term = RawTerm::enable().map_err(EditorError::Terminal)?;
        let viewport = term::viewport().unwrap_or((24, 80));
        let buffer = LineBuffer::from_lines(file::load_lines(&path));
        Ok(Self {
            term,
            buffer,
            path,
            viewport,
        })
    }

    /// Runs the session to completion: render, then decode/dispatch/render
    /// until Ctrl+Q. Consumes the editor so the raw-mode guard is released
    /// before the caller prints anything.
    pub fn run(mut self) -> Result<(), EditorError> {
        self.render()?;
        loop {
            let command = match input::read_command(&mut self.term) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => return Err(EditorError::Read(err)),
            };
            match command {
                Command::Quit => break,
                Command::Save => file::save_lines(&self.path, self.buffer.lines()),
                edit => apply(&mut self.buffer, edit),
            }
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> Result<(), EditorError> {
        let mut out = io::stdout().lock();
        render::draw(&mut out, &self.buffer, &self.path.to_string_lossy())
            .map_err(EditorError::Write)
    }
}

fn apply(buffer: &mut LineBuffer, command: Command) {
    match command {
        Command::InsertChar(ch) => buffer.insert_char(ch),
        Command::InsertNewline => buffer.insert_newline(),
        Command::DeleteBackward => buffer.delete_backward(),
        Command::Move(direction) => buffer.move_cursor(direction),
        Command::Quit | Command::Save => {}
    }
}
