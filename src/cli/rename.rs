//! `phototidy rename`, `relocate` and `rewrite`.
//!
//! `rename` and `relocate` run their filesystem pass, journaling each move as
//! it happens, then rewrite the documents and drop the journal. `rewrite`
//! replays a saved mapping, so an interrupted run can be finished.

use anyhow::{Result, bail};
use std::path::Path;

use crate::config::SiteConfig;
use crate::rename::{self, RenameMap};
use crate::rewrite::rewrite_documents;
use crate::utils::plural_count;
use crate::{debug, log};

/// Transliterate names under `[rename] root` and update the documents.
pub fn rename_assets(config: &SiteConfig) -> Result<()> {
    ensure_no_pending_journal(config)?;
    let map = rename::rename_tree(config)?;
    apply_mapping(config, &map)
}

/// Apply `[relocate] table` and update the documents.
pub fn relocate_assets(config: &SiteConfig) -> Result<()> {
    ensure_no_pending_journal(config)?;
    let map = rename::apply_table(config)?;
    apply_mapping(config, &map)
}

/// Rewrite documents from `--map`, or from the journal left by a previous run.
pub fn rewrite_from_mapping(config: &SiteConfig, map_path: Option<&Path>) -> Result<()> {
    let (path, is_journal) = match (map_path, &config.rename.journal) {
        (Some(path), _) => (path, false),
        (None, Some(journal)) => (journal.as_path(), true),
        (None, None) => bail!("no mapping given and `[rename] journal` is disabled; use --map"),
    };
    if is_journal && !path.exists() {
        bail!(
            "no rename journal at {}; nothing to resume",
            config.root_relative(path).display()
        );
    }

    let map = RenameMap::load(path)?;
    log!("rewrite"; "loaded {}", plural_count(map.len(), "rename"));
    rewrite_documents(config, &map)?;

    if is_journal {
        RenameMap::remove_journal(path)?;
    }
    Ok(())
}

/// A journal left by an interrupted run would be overwritten by a new pass.
fn ensure_no_pending_journal(config: &SiteConfig) -> Result<()> {
    if let Some(journal) = &config.rename.journal
        && journal.exists()
    {
        bail!(
            "unfinished rename journal at {}; run `phototidy rewrite` first",
            config.root_relative(journal).display()
        );
    }
    Ok(())
}

fn apply_mapping(config: &SiteConfig, map: &RenameMap) -> Result<()> {
    if map.is_empty() {
        log!("rewrite"; "nothing renamed, documents unchanged");
        return Ok(());
    }

    let saved = rewrite_documents(config, map)?;
    log!("done"; "{} updated", plural_count(saved, "document"));

    if let Some(journal) = &config.rename.journal {
        RenameMap::remove_journal(journal)?;
        debug!("rewrite"; "removed journal {}", config.root_relative(journal).display());
    }
    Ok(())
}
