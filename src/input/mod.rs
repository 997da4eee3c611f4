//! Numeric input: a single-shot parser plus a retrying prompt reader.
//!
//! [`parse_number`] decides integer vs. real from the text itself: anything
//! containing `.`, `e` or `E` goes down the real path, everything else must
//! be an integer. Malformed tokens such as `1e` or `..` therefore fail on
//! the real path and are rejected like any other garbage.
//!
//! [`Prompter`] owns the retry policy and works over any `BufRead`/`Write`
//! pair so sessions can be driven from memory in tests.

use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

use thiserror::Error;

use crate::models::Number;

/// Reasons operand text is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("empty input")]
    Empty,

    #[error("not a valid number: '{0}'")]
    Invalid(String),
}

/// Parse operand text into a [`Number`].
///
/// Surrounding whitespace is ignored. Underscores are accepted as digit
/// separators only when they sit between two digits (`1_000`). Integers
/// too large for `i128` are kept as the nearest real.
pub fn parse_number(text: &str) -> Result<Number, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    let invalid = || InputError::Invalid(text.to_string());
    let digits = strip_digit_separators(text).ok_or_else(invalid)?;

    if text.contains(['.', 'e', 'E']) {
        return digits.parse::<f64>().map(Number::Real).map_err(|_| invalid());
    }

    match digits.parse::<i128>() {
        Ok(n) => Ok(Number::Integer(n)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            tracing::debug!(text, "integer exceeds i128, keeping it as a real");
            digits.parse::<f64>().map(Number::Real).map_err(|_| invalid())
        }
        Err(_) => Err(invalid()),
    }
}

/// Remove `_` separators, or `None` if one is not flanked by digits.
fn strip_digit_separators(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| chars.get(j));
        let after = chars.get(i + 1);
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(out)
}

/// Line-oriented prompt reader.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `prompt` and read one line, trimmed.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        // Bytes that are not UTF-8 become U+FFFD, which no parser accepts.
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Prompt until the user enters a valid number.
    ///
    /// `diagnostic` is printed on its own line after every rejected entry.
    /// There is no retry limit; only end of input stops the loop, yielding
    /// `Ok(None)`.
    pub fn read_number(&mut self, prompt: &str, diagnostic: &str) -> io::Result<Option<Number>> {
        loop {
            let Some(text) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse_number(&text) {
                Ok(number) => return Ok(Some(number)),
                Err(e) => {
                    tracing::debug!(error = %e, "rejected operand");
                    writeln!(self.writer, "{diagnostic}")?;
                }
            }
        }
    }

    /// Mutable access to the output stream.
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the prompter, returning the output stream.
    pub fn into_writer(self) -> W {
        self.writer
    }
}
