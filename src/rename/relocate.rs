//! Filesystem pass of `phototidy relocate`.

use anyhow::Result;
use std::fs;

use super::{EntryKind, RenameMap};
use crate::config::SiteConfig;
use crate::log;
use crate::utils::path::resolve_url;

/// Move every `[relocate] table` row whose source exists.
///
/// Rows whose source is missing are logged and skipped. An existing target
/// is never overwritten.
pub fn apply_table(config: &SiteConfig) -> Result<RenameMap> {
    let public = config.public_dir();
    let mut map = RenameMap::journaled(config.rename.journal.clone());

    for row in &config.relocate.table {
        let from = resolve_url(public, &row.from);
        let to = resolve_url(public, &row.to);

        if !from.exists() {
            log!("relocate"; "not found: {}", row.from);
            continue;
        }
        if to.exists() {
            log!("relocate"; "target already exists, skipped: {}", row.to);
            continue;
        }

        let kind = if from.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        if let Some(parent) = to.parent()
            && let Err(err) = fs::create_dir_all(parent)
        {
            log!("error"; "failed to create {}: {}", parent.display(), err);
            continue;
        }
        if let Err(err) = fs::rename(&from, &to) {
            log!("error"; "failed to move {}: {}", row.from, err);
            continue;
        }

        log!("relocate"; "{} -> {}", row.from, row.to);
        map.record(kind, row.from.clone(), row.to.clone())?;
    }

    Ok(map)
}
