//! Renames on disk, recorded as a [`RenameMap`].
//!
//! ```text
//! rename_tree / apply_table ──► RenameMap ──► journal ──► rewrite ──► remove journal
//! ```
//!
//! The filesystem pass always completes before any document is touched.
//! The journal lets an interrupted run be finished with `phototidy rewrite`.

mod map;
mod relocate;
mod tree;

pub use map::{EntryKind, RenameMap};
pub use relocate::apply_table;
pub use tree::rename_tree;
