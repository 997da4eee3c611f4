//! The interactive read-validate-compute-print loop.
//!
//! A [`Session`] is a two-state machine. In [`State::Menu`] it shows the
//! menu and reads a choice; invalid choices print a diagnostic and stay in
//! `Menu`, the exit choice prints a farewell and moves to
//! [`State::Terminated`]. Operation choices read two operands, print the
//! calculation and return to `Menu`. Nothing is carried between iterations.
//!
//! End of input also terminates the session, without a farewell.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::arithmetic::Calculation;
use crate::constants;
use crate::input::Prompter;
use crate::models::{Choice, Number, Operation};
use crate::output::OutputRenderer;

/// Errors that end a session abnormally.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Menu,
    Terminated,
}

/// A calculator session over an input and an output stream.
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    renderer: Box<dyn OutputRenderer>,
    header: String,
    state: State,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        reader: R,
        writer: W,
        renderer: Box<dyn OutputRenderer>,
        header: impl Into<String>,
    ) -> Self {
        Self {
            prompter: Prompter::new(reader, writer),
            renderer,
            header: header.into(),
            state: State::Menu,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Run until the user exits or input runs out.
    pub fn run(&mut self) -> Result<(), SessionError> {
        tracing::info!(header = %self.header, "session started");
        while self.state == State::Menu {
            self.step()?;
        }
        tracing::info!("session finished");
        Ok(())
    }

    /// Perform one menu iteration.
    pub fn step(&mut self) -> Result<(), SessionError> {
        if self.state == State::Terminated {
            return Ok(());
        }

        let menu = self.renderer.menu(&self.header);
        self.write(&menu)?;

        let Some(text) = self.prompter.read_line(constants::CHOICE_PROMPT)? else {
            return self.end_of_input();
        };

        match text.parse::<Choice>() {
            Err(e) => {
                tracing::debug!(error = %e, "rejected menu choice");
                let diagnostic = self.renderer.diagnostic(constants::INVALID_CHOICE);
                self.write(&diagnostic)?;
            }
            Ok(Choice::Exit) => {
                let farewell = self.renderer.farewell(constants::FAREWELL);
                self.write(&farewell)?;
                self.state = State::Terminated;
            }
            Ok(Choice::Calculate(op)) => self.calculate(op)?,
        }
        Ok(())
    }

    /// Consume the session, returning the output stream.
    pub fn into_writer(self) -> W {
        self.prompter.into_writer()
    }

    fn calculate(&mut self, op: Operation) -> Result<(), SessionError> {
        tracing::debug!(operation = %op, "dispatching");

        let Some(lhs) = self.read_operand(constants::FIRST_OPERAND_PROMPT)? else {
            return self.end_of_input();
        };
        let Some(rhs) = self.read_operand(constants::SECOND_OPERAND_PROMPT)? else {
            return self.end_of_input();
        };

        let calculation = Calculation::evaluate(op, lhs, rhs);
        let line = self.renderer.calculation(&calculation);
        self.write(&line)
    }

    fn read_operand(&mut self, prompt: &str) -> Result<Option<Number>, SessionError> {
        let diagnostic = self.renderer.diagnostic(constants::INVALID_NUMBER);
        // Renderers terminate lines themselves; the prompter adds its own newline.
        let diagnostic = diagnostic.trim_end_matches('\n');
        Ok(self.prompter.read_number(prompt, diagnostic)?)
    }

    fn end_of_input(&mut self) -> Result<(), SessionError> {
        tracing::info!("input closed, ending session");
        self.state = State::Terminated;
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<(), SessionError> {
        let writer = self.prompter.writer();
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
