//! Filesystem pass of `phototidy rename`.
//!
//! Files are renamed first, then directories deepest first. Each rename is
//! recorded with the paths it had at that moment, which is the order
//! [`RenameMap::translate`] replays them in.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use super::{EntryKind, RenameMap};
use crate::config::SiteConfig;
use crate::slug::{Dictionary, Transliterator, contains_han, split_extension};
use crate::utils::path::to_root_url;
use crate::utils::walk::{collect_dirs_deepest_first, collect_files, has_extension};
use crate::utils::plural_count;
use crate::{debug, log};

/// Transliterate every matching name under `[rename] root`.
pub fn rename_tree(config: &SiteConfig) -> Result<RenameMap> {
    let settings = &config.rename;
    let root = &settings.root;
    let mut map = RenameMap::journaled(settings.journal.clone());

    if !root.is_dir() {
        log!("rename"; "{} not found, nothing to rename", config.root_relative(root).display());
        return Ok(map);
    }

    let dictionary = Dictionary::from_config(settings);
    let slugger = Transliterator::from_config(&dictionary, settings);
    let public = config.public_dir();

    for path in collect_files(root) {
        if !settings.extensions.is_empty() && !has_extension(&path, &settings.extensions) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if settings.only_han && !contains_han(name) {
            continue;
        }
        let candidate = slugger.file_name(name);
        if candidate == name {
            continue;
        }
        rename_one(&path, &candidate, EntryKind::File, public, &mut map)?;
    }
    let files = map.len();

    if settings.directories {
        for path in collect_dirs_deepest_first(root) {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !contains_han(name) {
                continue;
            }
            let candidate = slugger.dir_name(name);
            if candidate == name {
                continue;
            }
            rename_one(&path, &candidate, EntryKind::Directory, public, &mut map)?;
        }
    }

    let dirs = map.len() - files;
    log!(
        "rename";
        "renamed {} and {} director{}",
        plural_count(files, "file"),
        dirs,
        if dirs == 1 { "y" } else { "ies" }
    );
    Ok(map)
}

/// Rename `path` to a free variant of `candidate` in the same directory and
/// record it. A failed rename is logged and skipped; a failed journal write
/// aborts the pass.
fn rename_one(
    path: &Path,
    candidate: &str,
    kind: EntryKind,
    public: &Path,
    map: &mut RenameMap,
) -> Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    let target = free_target(parent, candidate, kind);

    if let Err(err) = fs::rename(path, &target) {
        log!("error"; "failed to rename {}: {}", path.display(), err);
        return Ok(());
    }
    log!(
        "rename";
        "{} -> {}",
        path.file_name().unwrap_or_default().to_string_lossy(),
        target.file_name().unwrap_or_default().to_string_lossy()
    );

    match (to_root_url(public, path), to_root_url(public, &target)) {
        (Some(old), Some(new)) => map.record(kind, old, new)?,
        _ => debug!("rename"; "{} is outside the public dir, not recorded", path.display()),
    }
    Ok(())
}

/// First of `candidate`, `candidate-1`, `candidate-2`, ... that does not
/// exist in `parent`. Files keep their extension after the suffix.
fn free_target(parent: &Path, candidate: &str, kind: EntryKind) -> PathBuf {
    let base = parent.join(candidate);
    if !base.exists() {
        return base;
    }
    let (stem, ext) = match kind {
        EntryKind::File => split_extension(candidate),
        EntryKind::Directory => (candidate, ""),
    };
    (1..)
        .map(|n| parent.join(format!("{stem}-{n}{ext}")))
        .find(|p| !p.exists())
        .unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config_at;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    fn setup() -> (TempDir, SiteConfig) {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("public/images")).unwrap();
        let config = test_config_at(dir.path());
        (dir, config)
    }

    #[test]
    fn test_rename_files_and_record_urls() {
        let (_dir, config) = setup();
        let images = config.rename.root.clone();
        touch(&images.join("胶片.webp"));
        touch(&images.join("ascii.webp"));
        touch(&images.join("海边.jpg"));

        let map = rename_tree(&config).unwrap();

        assert!(images.join("film.webp").exists());
        assert!(!images.join("胶片.webp").exists());
        assert!(images.join("ascii.webp").exists());
        // Extension filter leaves the jpg alone
        assert!(images.join("海边.jpg").exists());
        assert_eq!(map.len(), 1);
        assert_eq!(map.entries()[0].old, "/images/胶片.webp");
        assert_eq!(map.entries()[0].new, "/images/film.webp");
    }

    #[test]
    fn test_empty_extension_list_matches_every_file() {
        let (_dir, mut config) = setup();
        config.rename.extensions = Vec::new();
        let images = config.rename.root.clone();
        touch(&images.join("胶片.webp"));
        touch(&images.join("胶片.jpg"));

        let map = rename_tree(&config).unwrap();

        assert!(images.join("film.webp").exists());
        assert!(images.join("film.jpg").exists());
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_only_han_disabled_cleans_ascii_names() {
        let (_dir, mut config) = setup();
        let images = config.rename.root.clone();
        touch(&images.join("My Photo.webp"));
        touch(&images.join("ascii.webp"));

        // Default leaves names without Han alone
        assert!(rename_tree(&config).unwrap().is_empty());
        assert!(images.join("My Photo.webp").exists());

        config.rename.only_han = false;
        let map = rename_tree(&config).unwrap();

        assert!(images.join("My-Photo.webp").exists());
        assert!(images.join("ascii.webp").exists());
        assert_eq!(map.len(), 1);
        assert_eq!(map.entries()[0].new, "/images/My-Photo.webp");
    }

    #[test]
    fn test_journal_written_during_pass() {
        let (_dir, config) = setup();
        let images = config.rename.root.clone();
        touch(&images.join("胶片/海边.webp"));

        let map = rename_tree(&config).unwrap();

        // Documents not rewritten yet: the journal already holds every rename
        let journal = config.rename.journal.as_ref().unwrap();
        let saved = RenameMap::load(journal).unwrap();
        assert_eq!(saved.entries(), map.entries());
        assert_eq!(saved.len(), 2);
    }

    #[test]
    fn test_collision_suffix() {
        let (_dir, config) = setup();
        let images = config.rename.root.clone();
        touch(&images.join("film.webp"));
        touch(&images.join("film-1.webp"));
        touch(&images.join("胶片.webp"));

        let map = rename_tree(&config).unwrap();

        assert!(images.join("film-2.webp").exists());
        assert_eq!(map.entries()[0].new, "/images/film-2.webp");
    }

    #[test]
    fn test_directories_deepest_first() {
        let (_dir, config) = setup();
        let images = config.rename.root.clone();
        touch(&images.join("数码相机/胶片/a.webp"));

        let map = rename_tree(&config).unwrap();

        assert!(images.join("digital-cameras/film/a.webp").exists());
        let kinds: Vec<_> = map.entries().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EntryKind::Directory, EntryKind::Directory]);
        assert_eq!(
            map.translate("/images/数码相机/胶片/a.webp").as_deref(),
            Some("/images/digital-cameras/film/a.webp")
        );
    }

    #[test]
    fn test_directories_disabled() {
        let (_dir, mut config) = setup();
        config.rename.directories = false;
        let images = config.rename.root.clone();
        touch(&images.join("胶片/a.webp"));

        let map = rename_tree(&config).unwrap();
        assert!(map.is_empty());
        assert!(images.join("胶片/a.webp").exists());
    }

    #[test]
    fn test_missing_root_is_noop() {
        let dir = TempDir::new().unwrap();
        let config = test_config_at(dir.path());
        assert!(rename_tree(&config).unwrap().is_empty());
    }

    #[test]
    fn test_free_target_directory_has_no_extension_split() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("5.lesson")).unwrap();
        let target = free_target(dir.path(), "5.lesson", EntryKind::Directory);
        assert_eq!(target, dir.path().join("5.lesson-1"));
    }
}
