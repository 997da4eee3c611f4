//! menucalc — menu-driven interactive calculator (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod arithmetic;
pub mod config;
pub mod constants;
pub mod env;
pub mod input;
pub mod models;
pub mod output;
pub mod session;
