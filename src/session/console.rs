//! Console Runner
//!
//! Drives a session over any line source and output sink.

use std::io::{BufRead, Write};

use super::menu::{goodbye_banner, menu_for};
use super::state::Session;
use crate::error::Result;
use crate::library::Library;

/// Printed before each read
pub const PROMPT: &str = "ENTER COMMAND: ";

/// Runs the menu loop for one user
pub struct Console<R, W> {
    reader: R,
    writer: W,
    session: Session,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            session: Session::new(),
        }
    }

    /// Run until the user exits or input ends
    ///
    /// Each iteration shows the menu of the current state, reads one line,
    /// and writes whatever the state machine reports. End of input is
    /// treated like the exit command.
    pub fn run(&mut self, library: &mut Library) -> Result<()> {
        tracing::debug!("Console session started");

        let mut line = String::new();
        while !self.session.is_finished() {
            writeln!(self.writer, "{}", menu_for(&self.session.state()))?;
            write!(self.writer, "{}", PROMPT)?;
            self.writer.flush()?;

            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                tracing::debug!("End of input, leaving session");
                writeln!(self.writer)?;
                break;
            }

            for out in self.session.handle_line(library, &line) {
                writeln!(self.writer, "{}", out)?;
            }
        }

        writeln!(self.writer, "{}", goodbye_banner())?;
        self.writer.flush()?;

        tracing::debug!("Console session ended");
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Give back the output sink
    pub fn into_writer(self) -> W {
        self.writer
    }
}
