//! Menu operations and the choice parsed from the user's selection.

use std::str::FromStr;

use strum::{Display, EnumIter, IntoEnumIterator};
use thiserror::Error;

/// One of the four arithmetic operations offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Infix symbol used when printing a calculation.
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    /// Menu key the user types to select this operation.
    pub fn key(self) -> &'static str {
        match self {
            Operation::Add => "1",
            Operation::Subtract => "2",
            Operation::Multiply => "3",
            Operation::Divide => "4",
        }
    }
}

/// Menu key for leaving the session.
pub const EXIT_KEY: &str = "5";

/// Choice text outside the menu keys.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid choice: '{0}'")]
pub struct InvalidChoice(pub String);

/// A validated menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Calculate(Operation),
    Exit,
}

impl Choice {
    /// All menu entries in display order, as `(key, label)`.
    pub fn menu_entries() -> Vec<(&'static str, String)> {
        Operation::iter()
            .map(|op| (op.key(), op.to_string()))
            .chain(std::iter::once((EXIT_KEY, "Exit".to_string())))
            .collect()
    }
}

impl FromStr for Choice {
    type Err = InvalidChoice;

    /// Surrounding whitespace is ignored; anything else must match a key exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if key == EXIT_KEY {
            return Ok(Choice::Exit);
        }
        Operation::iter()
            .find(|op| op.key() == key)
            .map(Choice::Calculate)
            .ok_or_else(|| InvalidChoice(key.to_string()))
    }
}
