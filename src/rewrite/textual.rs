//! Textual strategy: replace old paths in the serialized document.
//!
//! Every occurrence is replaced, including inside longer paths and in
//! fields that are not references. `/a.webp` also rewrites `/x/a.webp`.
//! Paths containing characters JSON escapes (`"`, `\`) never match.

use anyhow::Result;

use crate::content::Document;
use crate::log;
use crate::rename::RenameMap;

pub(super) fn apply(doc: &mut Document, map: &RenameMap) -> Result<usize> {
    let mut text = doc.to_pretty()?;
    let mut changes = 0;

    for entry in map.entries() {
        let hits = text.matches(entry.old.as_str()).count();
        if hits > 0 {
            log!("rewrite"; "{} -> {} ({}x)", entry.old, entry.new, hits);
            text = text.replace(entry.old.as_str(), &entry.new);
            changes += hits;
        }
    }

    if changes > 0 {
        doc.replace_text(&text)?;
    }
    Ok(changes)
}
