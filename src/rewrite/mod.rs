//! Applying a [`RenameMap`] to the content documents.
//!
//! | Strategy     | Matches                                          |
//! |--------------|--------------------------------------------------|
//! | `structured` | Known reference fields, whole value or dir prefix |
//! | `textual`    | Any occurrence of `old` in the pretty JSON text   |
//!
//! Only documents with at least one change are written back.

mod structured;
mod textual;

use anyhow::Result;

use crate::config::{RewriteStrategy, SiteConfig};
use crate::content::{Document, DocumentKind};
use crate::rename::RenameMap;
use crate::utils::plural_count;
use crate::{debug, log};

/// Rewrite every configured document through `map`.
///
/// Returns the number of documents saved. Missing documents are skipped;
/// malformed ones abort.
pub fn rewrite_documents(config: &SiteConfig, map: &RenameMap) -> Result<usize> {
    let mut saved = 0;

    for kind in DocumentKind::ALL {
        let Some(mut doc) = Document::load(config, kind)? else {
            debug!("rewrite"; "{} not found, skipped", kind);
            continue;
        };

        let changes = rewrite_document(&mut doc, map, config.rewrite.strategy)?;
        if changes == 0 {
            debug!("rewrite"; "{} unchanged", doc.kind);
            continue;
        }

        doc.save()?;
        saved += 1;
        log!(
            "rewrite";
            "updated {} ({})",
            config.root_relative(&doc.path).display(),
            plural_count(changes, "reference")
        );
    }

    Ok(saved)
}

/// Apply `map` to one document in memory. Returns the number of changes.
pub fn rewrite_document(
    doc: &mut Document,
    map: &RenameMap,
    strategy: RewriteStrategy,
) -> Result<usize> {
    Ok(match strategy {
        RewriteStrategy::Structured => structured::apply(doc, map),
        RewriteStrategy::Textual => textual::apply(doc, map)?,
    })
}
