//! Command-line interface module.

mod args;
pub mod check;
pub mod clean;
pub mod convert;
pub mod covers;
pub mod prune;
pub mod rename;

pub use args::{Cli, Commands};
