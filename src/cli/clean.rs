//! `phototidy clean`: delete raw formats and duplicates under the public dir.
//!
//! Passes, in order:
//!
//! 1. files with a disallowed extension (unless preserved)
//! 2. later copies of a duplicate (same name, or same content digest)
//! 3. directories left empty, deepest first
//!
//! There is no dry run.

use anyhow::Result;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{CleanConfig, DuplicateMode, SiteConfig};
use crate::utils::hash::file_digest;
use crate::utils::walk::{collect_dirs_deepest_first, collect_files, dir_size, has_extension, is_empty_dir};
use crate::utils::{human_bytes, plural_count};
use crate::{debug, log};

/// Outcome of a cleaning run.
#[derive(Debug, Default)]
pub struct CleanReport {
    /// Deleted files, in deletion order.
    pub removed: Vec<PathBuf>,
    /// Bytes of the deleted files.
    pub freed: u64,
    /// Removed empty directories.
    pub removed_dirs: usize,
    /// Directory size before cleaning.
    pub before: u64,
    /// Directory size after cleaning.
    pub after: u64,
}

/// Clean the public dir and log what was removed.
pub fn clean_assets(config: &SiteConfig) -> Result<()> {
    let root = config.public_dir();
    if !root.is_dir() {
        log!("clean"; "{} not found, nothing to clean", config.root_relative(root).display());
        return Ok(());
    }

    let report = clean_dir(root, &config.clean);

    log!("clean"; "size before: {}", human_bytes(report.before));
    log!(
        "done";
        "removed {} and {}, freed {}",
        plural_count(report.removed.len(), "file"),
        plural_count(report.removed_dirs, "empty dir"),
        human_bytes(report.freed)
    );
    log!("clean"; "size after: {}", human_bytes(report.after));
    log!("clean"; "saved: {}", human_bytes(report.before.saturating_sub(report.after)));
    Ok(())
}

/// Run every cleaning pass over `root`.
pub fn clean_dir(root: &Path, settings: &CleanConfig) -> CleanReport {
    let mut report = CleanReport {
        before: dir_size(root),
        ..CleanReport::default()
    };

    remove_disallowed(root, settings, &mut report);
    if !settings.duplicate_extension.is_empty() {
        remove_duplicates(root, settings, &mut report);
    }
    report.removed_dirs = remove_empty_dirs(root);

    report.after = dir_size(root);
    report
}

fn remove_disallowed(root: &Path, settings: &CleanConfig, report: &mut CleanReport) {
    for path in collect_files(root) {
        if !has_extension(&path, &settings.extensions) {
            continue;
        }
        let preserved = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| settings.preserve.iter().any(|p| p == name));
        if preserved {
            debug!("clean"; "preserved {}", path.display());
            continue;
        }
        remove_file(&path, report);
    }
}

fn remove_duplicates(root: &Path, settings: &CleanConfig, report: &mut CleanReport) {
    let extension = std::slice::from_ref(&settings.duplicate_extension);
    let mut seen: FxHashMap<String, PathBuf> = FxHashMap::default();

    for path in collect_files(root) {
        if !has_extension(&path, extension) {
            continue;
        }
        let key = match settings.duplicates {
            DuplicateMode::Name => path.file_name().map(|n| n.to_string_lossy().into_owned()),
            DuplicateMode::Content => match file_digest(&path) {
                Ok(digest) => Some(digest),
                Err(err) => {
                    log!("error"; "failed to hash {}: {}", path.display(), err);
                    None
                }
            },
        };
        let Some(key) = key else {
            continue;
        };

        match seen.get(&key) {
            Some(original) => {
                log!("clean"; "duplicate of {}: {}", original.display(), path.display());
                remove_file(&path, report);
            }
            None => {
                seen.insert(key, path);
            }
        }
    }
}

/// Remove empty directories below `root`, deepest first. Failures are ignored.
fn remove_empty_dirs(root: &Path) -> usize {
    let mut removed = 0;
    for dir in collect_dirs_deepest_first(root) {
        if is_empty_dir(&dir) && fs::remove_dir(&dir).is_ok() {
            debug!("clean"; "removed empty dir {}", dir.display());
            removed += 1;
        }
    }
    removed
}

fn remove_file(path: &Path, report: &mut CleanReport) {
    let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    match fs::remove_file(path) {
        Ok(()) => {
            log!("clean"; "deleted {} ({})", path.display(), human_bytes(size));
            report.removed.push(path.to_path_buf());
            report.freed += size;
        }
        Err(err) => log!("error"; "failed to delete {}: {}", path.display(), err),
    }
}
