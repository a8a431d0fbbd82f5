//! Structured strategy: look up each reference field in the mapping.

use crate::content::{Document, refs};
use crate::log;
use crate::rename::RenameMap;

pub(super) fn apply(doc: &mut Document, map: &RenameMap) -> usize {
    let mut changes = 0;
    for record in refs::records_mut(&mut doc.value) {
        refs::visit_mut(record, |field, url| {
            if let Some(new) = map.translate(url) {
                log!("rewrite"; "{}: {} -> {}", field, url, new);
                *url = new;
                changes += 1;
            }
        });
    }
    changes
}
