//! Directory traversal.
//!
//! Every walk is collected into a sorted list before the caller mutates the
//! tree, so deletions and renames never race the walker.

use jwalk::WalkDir;
use std::fs;
use std::path::{Path, PathBuf};

/// Collect all files under `dir` recursively, in sorted walk order.
///
/// Hidden files are included. A missing directory yields an empty list.
pub fn collect_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .skip_hidden(false)
        .sort(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .collect()
}

/// Collect all directories strictly below `dir`, deepest first.
///
/// Siblings at the same depth keep sorted order, so renaming in this order
/// never invalidates a path that has not been visited yet.
pub fn collect_dirs_deepest_first(dir: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<(usize, PathBuf)> = WalkDir::new(dir)
        .skip_hidden(false)
        .sort(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.depth > 0 && e.file_type().is_dir())
        .map(|e| (e.depth, e.path()))
        .collect();
    // Stable sort keeps walk order among equal depths.
    dirs.sort_by(|a, b| b.0.cmp(&a.0));
    dirs.into_iter().map(|(_, path)| path).collect()
}

/// Total size in bytes of every file under `dir`.
pub fn dir_size(dir: &Path) -> u64 {
    collect_files(dir)
        .iter()
        .filter_map(|p| fs::metadata(p).ok())
        .map(|m| m.len())
        .sum()
}

/// Check whether `path` has one of `extensions` (case-insensitive, no dot).
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)))
}

/// Check whether a directory has no entries at all.
pub fn is_empty_dir(dir: &Path) -> bool {
    fs::read_dir(dir).is_ok_and(|mut entries| entries.next().is_none())
}
