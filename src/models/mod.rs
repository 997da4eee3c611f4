//! Shared types used across all modules.
//!
//! Numbers, operations, and menu choices live here so that the
//! arithmetic, input, and session modules never reach into each
//! other's internals.

pub mod number;
pub mod operation;

pub use number::Number;
pub use operation::{Choice, InvalidChoice, Operation};
