//! `phototidy covers`: repair missing tutorial cover images.

use anyhow::Result;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::content::{Document, DocumentKind, refs};
use crate::log;
use crate::utils::path::{resolve_url, to_root_url};
use crate::utils::plural_count;
use crate::utils::walk::has_extension;

/// Point each unresolved `featuredImageUrl` at the first WebP of its folder.
pub fn repair_covers(config: &SiteConfig) -> Result<()> {
    let Some(mut doc) = Document::load(config, DocumentKind::Tutorials)? else {
        log!("covers"; "{} not found", config.document_path(DocumentKind::Tutorials).display());
        return Ok(());
    };

    let repaired = repair_document(&mut doc, config.public_dir());
    if repaired > 0 {
        doc.save()?;
    }
    log!("done"; "repaired {}", plural_count(repaired, "cover"));
    Ok(())
}

fn repair_document(doc: &mut Document, public: &Path) -> usize {
    let mut repaired = 0;

    for record in refs::records_mut(&mut doc.value) {
        let Some(obj) = record.as_object_mut() else {
            continue;
        };
        let Some(current) = obj.get(refs::FEATURED_IMAGE).and_then(Value::as_str) else {
            continue;
        };
        let cover = resolve_url(public, current);
        if cover.exists() {
            continue;
        }

        let title = obj
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("untitled")
            .to_string();
        let replacement = cover
            .parent()
            .and_then(first_webp)
            .and_then(|path| to_root_url(public, &path));

        match replacement {
            Some(url) => {
                log!("covers"; "{}: {}", title, url);
                obj.insert(refs::FEATURED_IMAGE.to_string(), Value::String(url));
                repaired += 1;
            }
            None => log!("warning"; "{}: no cover image found", title),
        }
    }
    repaired
}

/// First `*.webp` in `dir`, by file name.
fn first_webp(dir: &Path) -> Option<PathBuf> {
    let webp = ["webp".to_string()];
    let mut candidates: Vec<PathBuf> = fs::read_dir(dir)
        .ok()?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_extension(path, &webp))
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config_at;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_repair_uses_first_webp_by_name() {
        let dir = TempDir::new().unwrap();
        let config = test_config_at(dir.path());
        let lesson = config.public_dir().join("images/lesson-01");
        fs::create_dir_all(&lesson).unwrap();
        fs::write(lesson.join("b.webp"), b"x").unwrap();
        fs::write(lesson.join("a.webp"), b"x").unwrap();
        fs::write(lesson.join("0.jpg"), b"x").unwrap();

        let mut doc = Document {
            kind: DocumentKind::Tutorials,
            path: config.document_path(DocumentKind::Tutorials),
            value: json!([
                {"title": "Lesson 1", "featuredImageUrl": "/images/lesson-01/cover.jpg"},
                {"title": "Lesson 2", "featuredImageUrl": "/images/lesson-02/cover.jpg"},
                {"title": "Lesson 3"},
            ]),
        };

        assert_eq!(repair_document(&mut doc, config.public_dir()), 1);
        assert_eq!(doc.value[0]["featuredImageUrl"], "/images/lesson-01/a.webp");
        assert_eq!(doc.value[1]["featuredImageUrl"], "/images/lesson-02/cover.jpg");
    }

    #[test]
    fn test_existing_cover_untouched_and_not_saved() {
        let dir = TempDir::new().unwrap();
        let config = test_config_at(dir.path());
        let lesson = config.public_dir().join("images/l");
        fs::create_dir_all(&lesson).unwrap();
        fs::write(lesson.join("cover.jpg"), b"x").unwrap();
        let path = config.document_path(DocumentKind::Tutorials);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let text = r#"[{"featuredImageUrl":"/images/l/cover.jpg"}]"#;
        fs::write(&path, text).unwrap();

        repair_covers(&config).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), text);
    }
}
