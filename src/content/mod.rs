//! JSON content documents and their asset references.
//!
//! # Module Structure
//!
//! ```text
//! content/
//! ├── document.rs   # Document load/save, DocumentError
//! ├── refs.rs       # Reference-field visitor
//! └── mod.rs        # DocumentKind (this file)
//! ```

mod document;
pub mod refs;

pub use document::{Document, DocumentError};

use std::fmt;

/// The three content documents the blog reads.
///
/// Declaration order is processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum DocumentKind {
    /// `tutorials.json`: lesson records with `featuredImageUrl` and `images`.
    Tutorials,
    /// `galleries.json`: gallery records with `coverPhotoUrl` and `photos`.
    Galleries,
    /// `photographer.json`: a single record with `avatarUrl`.
    Photographer,
}

impl DocumentKind {
    pub const ALL: [Self; 3] = [Self::Tutorials, Self::Galleries, Self::Photographer];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Tutorials => "tutorials",
            Self::Galleries => "galleries",
            Self::Photographer => "photographer",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
