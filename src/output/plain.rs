//! Plain renderer: no ANSI styling, for pipes and scripts.

use crate::arithmetic::Calculation;
use crate::output::{OutputRenderer, framed_header, menu_lines};

/// Undecorated output renderer.
pub struct PlainRenderer;

impl OutputRenderer for PlainRenderer {
    fn menu(&self, header: &str) -> String {
        let mut output = format!("\n{}\n", framed_header(header));
        for line in menu_lines() {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    fn calculation(&self, calculation: &Calculation) -> String {
        format!("{calculation}\n")
    }

    fn diagnostic(&self, message: &str) -> String {
        format!("{message}\n")
    }

    fn farewell(&self, message: &str) -> String {
        format!("{message}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Number, Operation};
    use pretty_assertions::assert_eq;

    #[test]
    fn menu_layout() {
        let menu = PlainRenderer.menu("Simple Calculator");
        assert_eq!(
            menu,
            "\n===== Simple Calculator =====\n\
             1. Add\n2. Subtract\n3. Multiply\n4. Divide\n5. Exit\n"
        );
    }

    #[test]
    fn calculation_lines() {
        let ok = Calculation::evaluate(Operation::Multiply, Number::Integer(6), Number::Real(0.5));
        assert_eq!(PlainRenderer.calculation(&ok), "6 * 0.5 = 3.0\n");

        let err = Calculation::evaluate(Operation::Divide, Number::Real(1.5), Number::Integer(0));
        assert_eq!(
            PlainRenderer.calculation(&err),
            "1.5 / 0 -> Error: Division by zero\n"
        );
    }

    #[test]
    fn diagnostic_and_farewell_are_single_lines() {
        assert_eq!(PlainRenderer.diagnostic("nope"), "nope\n");
        assert_eq!(PlainRenderer.farewell("bye"), "bye\n");
    }
}
