//! Terminal renderer: the same lines as the plain renderer, styled.
//!
//! Each line is styled as a whole so its text stays contiguous even when
//! ANSI codes are emitted.

use colored::Colorize;

use crate::arithmetic::Calculation;
use crate::output::{OutputRenderer, framed_header, menu_lines};

/// Terminal output renderer with colored text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn menu(&self, header: &str) -> String {
        let mut output = format!("\n{}\n", framed_header(header).cyan().bold());
        for line in menu_lines() {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    fn calculation(&self, calculation: &Calculation) -> String {
        let line = calculation.to_string();
        if calculation.is_success() {
            format!("{}\n", line.green())
        } else {
            format!("{}\n", line.red().bold())
        }
    }

    fn diagnostic(&self, message: &str) -> String {
        format!("{}\n", message.yellow())
    }

    fn farewell(&self, message: &str) -> String {
        format!("{}\n", message.dimmed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Number, Operation};

    #[test]
    fn menu_contains_header_and_entries() {
        let menu = TerminalRenderer.menu("Pocket");
        assert!(menu.starts_with('\n'));
        assert!(menu.contains("===== Pocket ====="));
        for entry in ["1. Add", "2. Subtract", "3. Multiply", "4. Divide", "5. Exit"] {
            assert!(menu.contains(entry), "missing {entry}");
        }
    }

    #[test]
    fn calculation_text_survives_styling() {
        let ok = Calculation::evaluate(Operation::Add, Number::Integer(3), Number::Integer(4));
        let rendered = TerminalRenderer.calculation(&ok);
        assert!(rendered.contains("3 + 4 = 7"));
        assert!(rendered.ends_with('\n'));

        let err = Calculation::evaluate(Operation::Divide, Number::Integer(6), Number::Integer(0));
        assert!(
            TerminalRenderer
                .calculation(&err)
                .contains("6 / 0 -> Error: Division by zero")
        );
    }

    #[test]
    fn diagnostic_keeps_message() {
        assert!(TerminalRenderer.diagnostic("Invalid choice.").contains("Invalid choice."));
        assert!(TerminalRenderer.farewell("Goodbye!").contains("Goodbye!"));
    }
}
