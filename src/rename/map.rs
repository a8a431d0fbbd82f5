//! Rename mapping and its on-disk journal.

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// What a mapping entry renamed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Matches a reference exactly.
    File,
    /// Matches a reference equal to `old` or below `old/`.
    Directory,
}

/// One rename, as root-relative URLs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenameEntry {
    pub kind: EntryKind,
    pub old: String,
    pub new: String,
}

/// Ordered rename mapping, unique on `old`.
///
/// Entries are kept in the order the renames happened, and are replayed in
/// that order. Directories are renamed deepest first, so replaying walks a
/// reference up its ancestors.
#[derive(Debug, Clone, Default)]
pub struct RenameMap {
    entries: Vec<RenameEntry>,
    index: FxHashMap<String, usize>,
    /// Rewritten after every [`RenameMap::record`].
    journal: Option<PathBuf>,
}

impl RenameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty map that persists itself to `journal` as renames are recorded.
    pub fn journaled(journal: Option<PathBuf>) -> Self {
        Self {
            journal,
            ..Self::default()
        }
    }

    /// Build a map from entries, keeping the first of any duplicate `old`.
    pub fn from_entries(entries: impl IntoIterator<Item = RenameEntry>) -> Self {
        let mut map = Self::new();
        for entry in entries {
            map.push(entry.kind, entry.old, entry.new);
        }
        map
    }

    /// Record a rename. Returns `false` if `old` is already mapped.
    pub fn push(&mut self, kind: EntryKind, old: String, new: String) -> bool {
        if self.index.contains_key(&old) {
            return false;
        }
        self.index.insert(old.clone(), self.entries.len());
        self.entries.push(RenameEntry { kind, old, new });
        true
    }

    /// Record a rename that just happened on disk and update the journal,
    /// so an interrupted pass can still be rewritten.
    pub fn record(&mut self, kind: EntryKind, old: String, new: String) -> Result<()> {
        if self.push(kind, old, new)
            && let Some(journal) = &self.journal
        {
            self.save(journal)?;
        }
        Ok(())
    }

    pub fn entries(&self) -> &[RenameEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rewrite a reference through the mapping.
    ///
    /// Entries are replayed in recorded order against the current value: a
    /// file entry matches it exactly, a directory entry as a prefix. A later
    /// entry therefore sees the path an earlier one produced. Returns `None`
    /// when nothing matched.
    pub fn translate(&self, reference: &str) -> Option<String> {
        let mut current = Cow::Borrowed(reference);

        for entry in &self.entries {
            let next = match entry.kind {
                EntryKind::File => (current == entry.old).then(|| entry.new.clone()),
                EntryKind::Directory => strip_dir_prefix(&current, &entry.old)
                    .map(|rest| format!("{}{}", entry.new, rest)),
            };
            if let Some(next) = next {
                current = Cow::Owned(next);
            }
        }

        match current {
            Cow::Owned(new) if new != reference => Some(new),
            _ => None,
        }
    }

    // ========================================================================
    // journal
    // ========================================================================

    /// Write the mapping as a JSON journal, creating parent directories.
    ///
    /// The file is replaced in one rename, so a reader never sees half a
    /// journal.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(&self.entries)?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, text)
            .with_context(|| format!("Failed to write rename journal {}", tmp.display()))?;
        fs::rename(&tmp, path)
            .with_context(|| format!("Failed to write rename journal {}", path.display()))
    }

    /// Read a mapping written by [`RenameMap::save`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rename mapping {}", path.display()))?;
        let entries: Vec<RenameEntry> = serde_json::from_str(&text)
            .with_context(|| format!("Malformed rename mapping {}", path.display()))?;
        Ok(Self::from_entries(entries))
    }

    /// Delete a journal once its mapping has been applied.
    pub fn remove_journal(path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Err(err) if err.kind() != std::io::ErrorKind::NotFound => {
                Err(err).with_context(|| format!("Failed to remove {}", path.display()))
            }
            _ => Ok(()),
        }
    }
}

/// Remainder of `reference` below directory `dir`, if it is `dir` itself
/// or lies under `dir/`.
fn strip_dir_prefix<'a>(reference: &'a str, dir: &str) -> Option<&'a str> {
    let rest = reference.strip_prefix(dir)?;
    (rest.is_empty() || rest.starts_with('/')).then_some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn map(entries: &[(EntryKind, &str, &str)]) -> RenameMap {
        RenameMap::from_entries(entries.iter().map(|(kind, old, new)| RenameEntry {
            kind: *kind,
            old: (*old).to_string(),
            new: (*new).to_string(),
        }))
    }

    #[test]
    fn test_unique_on_old() {
        let mut m = RenameMap::new();
        assert!(m.push(EntryKind::File, "/a".into(), "/b".into()));
        assert!(!m.push(EntryKind::File, "/a".into(), "/c".into()));
        assert_eq!(m.len(), 1);
        assert_eq!(m.translate("/a").as_deref(), Some("/b"));
    }

    #[test]
    fn test_file_entry_is_exact() {
        let m = map(&[(EntryKind::File, "/images/胶片.webp", "/images/film.webp")]);
        assert_eq!(
            m.translate("/images/胶片.webp").as_deref(),
            Some("/images/film.webp")
        );
        assert_eq!(m.translate("/images/胶片.webp.bak"), None);
        assert_eq!(m.translate("/other.webp"), None);
    }

    #[test]
    fn test_directory_entry_is_prefix() {
        let m = map(&[(EntryKind::Directory, "/images/课", "/images/lesson")]);
        assert_eq!(
            m.translate("/images/课/a.webp").as_deref(),
            Some("/images/lesson/a.webp")
        );
        assert_eq!(m.translate("/images/课").as_deref(), Some("/images/lesson"));
        // Sibling sharing a name prefix is not below the directory
        assert_eq!(m.translate("/images/课程/a.webp"), None);
    }

    #[test]
    fn test_file_then_nested_directories() {
        let m = map(&[
            (EntryKind::File, "/images/父/子/胶片.webp", "/images/父/子/film.webp"),
            (EntryKind::Directory, "/images/父/子", "/images/父/child"),
            (EntryKind::Directory, "/images/父", "/images/parent"),
        ]);
        assert_eq!(
            m.translate("/images/父/子/胶片.webp").as_deref(),
            Some("/images/parent/child/film.webp")
        );
        assert_eq!(
            m.translate("/images/父/other.webp").as_deref(),
            Some("/images/parent/other.webp")
        );
    }

    #[test]
    fn test_file_entry_after_directory_move() {
        // relocate table: move the folder, then rename a file inside it
        let m = map(&[
            (EntryKind::Directory, "/images/A", "/images/B"),
            (EntryKind::File, "/images/B/x.webp", "/images/B/y.webp"),
        ]);
        assert_eq!(
            m.translate("/images/A/x.webp").as_deref(),
            Some("/images/B/y.webp")
        );
        assert_eq!(
            m.translate("/images/B/x.webp").as_deref(),
            Some("/images/B/y.webp")
        );
        assert_eq!(
            m.translate("/images/A/z.webp").as_deref(),
            Some("/images/B/z.webp")
        );
    }

    #[test]
    fn test_journal_roundtrip_and_remove() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".phototidy/renames.json");
        let m = map(&[
            (EntryKind::File, "/a/胶片.webp", "/a/film.webp"),
            (EntryKind::Directory, "/a", "/b"),
        ]);
        m.save(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"kind\": \"directory\""));
        assert!(text.contains("胶片"));

        let loaded = RenameMap::load(&path).unwrap();
        assert_eq!(loaded.entries(), m.entries());

        RenameMap::remove_journal(&path).unwrap();
        assert!(!path.exists());
        // Removing twice is fine
        RenameMap::remove_journal(&path).unwrap();
    }

    #[test]
    fn test_record_updates_journal_each_time() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".phototidy/renames.json");
        let mut m = RenameMap::journaled(Some(path.clone()));

        m.record(EntryKind::File, "/a/胶片.webp".into(), "/a/film.webp".into())
            .unwrap();
        assert_eq!(RenameMap::load(&path).unwrap().len(), 1);

        m.record(EntryKind::Directory, "/a".into(), "/b".into()).unwrap();
        let loaded = RenameMap::load(&path).unwrap();
        assert_eq!(loaded.entries(), m.entries());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_load_missing_journal_fails() {
        let dir = TempDir::new().unwrap();
        assert!(RenameMap::load(&dir.path().join("none.json")).is_err());
    }
}
