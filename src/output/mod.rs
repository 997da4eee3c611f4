//! Output renderers: styled terminal text and undecorated plain text.

pub mod plain;
pub mod terminal;

use crate::arithmetic::Calculation;
use crate::config::DisplayConfig;
use crate::models::Choice;

pub use plain::PlainRenderer;
pub use terminal::TerminalRenderer;

/// Trait for rendering the session's output lines.
///
/// Every method returns complete text including trailing newlines, ready
/// to be written to the output stream as-is.
pub trait OutputRenderer {
    /// Render the menu: a blank line, the framed header, then one line per entry.
    fn menu(&self, header: &str) -> String;

    /// Render the result line of a calculation.
    fn calculation(&self, calculation: &Calculation) -> String;

    /// Render a validation diagnostic.
    fn diagnostic(&self, message: &str) -> String;

    /// Render the farewell printed on exit.
    fn farewell(&self, message: &str) -> String;
}

/// Pick the renderer matching the display settings.
pub fn renderer_for(display: &DisplayConfig) -> Box<dyn OutputRenderer> {
    if display.plain {
        Box::new(PlainRenderer)
    } else {
        Box::new(TerminalRenderer)
    }
}

/// `===== header =====`
pub(crate) fn framed_header(header: &str) -> String {
    format!("===== {header} =====")
}

/// `1. Add` through `5. Exit`.
pub(crate) fn menu_lines() -> Vec<String> {
    Choice::menu_entries()
        .into_iter()
        .map(|(key, label)| format!("{key}. {label}"))
        .collect()
}
