//! Utility modules shared by every command.

pub mod format;
pub mod hash;
pub mod path;
pub mod walk;

pub use format::{human_bytes, plural_count, plural_s};
