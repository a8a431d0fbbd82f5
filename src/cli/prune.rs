//! `phototidy prune`: drop list entries whose images are gone.
//!
//! Only list-valued fields (`images`, `photos`) are pruned. Scalar fields
//! such as `featuredImageUrl` are left alone even when they do not resolve.

use anyhow::Result;
use serde_json::Value;
use std::path::Path;

use crate::config::SiteConfig;
use crate::content::{Document, DocumentKind, refs};
use crate::utils::path::resolve_url;
use crate::utils::plural_count;
use crate::{debug, log};

/// Prune the given documents (tutorials when empty).
pub fn prune_documents(config: &SiteConfig, kinds: &[DocumentKind]) -> Result<()> {
    let kinds = if kinds.is_empty() {
        &[DocumentKind::Tutorials][..]
    } else {
        kinds
    };

    for &kind in kinds {
        let Some(mut doc) = Document::load(config, kind)? else {
            log!("prune"; "{} not found, skipped", kind);
            continue;
        };

        let dropped = prune_document(&mut doc, config.public_dir());
        if dropped == 0 {
            debug!("prune"; "{} unchanged", kind);
            continue;
        }
        doc.save()?;
        log!(
            "done";
            "removed {} from {}",
            plural_count(dropped, "item"),
            config.root_relative(&doc.path).display()
        );
    }
    Ok(())
}

/// Drop unresolved list entries in place. Returns the number dropped.
fn prune_document(doc: &mut Document, public: &Path) -> usize {
    let mut dropped = 0;
    for record in refs::records_mut(&mut doc.value) {
        let Some(obj) = record.as_object_mut() else {
            continue;
        };
        for field in [refs::IMAGES, refs::PHOTOS] {
            if let Some(Value::Array(items)) = obj.get_mut(field) {
                let before = items.len();
                items.retain(|item| {
                    let keep = refs::item_refs(item)
                        .iter()
                        .all(|url| resolve_url(public, url).exists());
                    if !keep {
                        log!("prune"; "dropping missing {} entry: {}", field, item);
                    }
                    keep
                });
                dropped += before - items.len();
            }
        }
    }
    dropped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config_at;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn site() -> (TempDir, SiteConfig) {
        let dir = TempDir::new().unwrap();
        let config = test_config_at(dir.path());
        fs::create_dir_all(config.public_dir().join("images")).unwrap();
        fs::write(config.public_dir().join("images/a.webp"), b"x").unwrap();
        fs::create_dir_all(config.document_path(DocumentKind::Tutorials).parent().unwrap())
            .unwrap();
        (dir, config)
    }

    #[test]
    fn test_prune_images_keeps_scalar_fields() {
        let (_dir, config) = site();
        let path = config.document_path(DocumentKind::Tutorials);
        fs::write(
            &path,
            r#"[{"featuredImageUrl": "/images/gone.webp", "images": ["/images/a.webp", "/images/b.webp"]}]"#,
        )
        .unwrap();

        prune_documents(&config, &[]).unwrap();

        let saved: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            saved,
            json!([{"featuredImageUrl": "/images/gone.webp", "images": ["/images/a.webp"]}])
        );
    }

    #[test]
    fn test_photo_kept_only_when_all_refs_resolve() {
        let (_dir, config) = site();
        let mut doc = Document {
            kind: DocumentKind::Galleries,
            path: config.document_path(DocumentKind::Galleries),
            value: json!([{"photos": [
                {"url": "/images/a.webp", "thumbnailUrl": "/images/a.webp"},
                {"url": "/images/a.webp", "thumbnailUrl": "/images/thumb-gone.webp"},
                {"title": "no references"},
            ]}]),
        };

        assert_eq!(prune_document(&mut doc, config.public_dir()), 1);
        assert_eq!(doc.value[0]["photos"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_unchanged_document_not_rewritten() {
        let (_dir, config) = site();
        let path = config.document_path(DocumentKind::Tutorials);
        let text = r#"[{"images":["/images/a.webp"]}]"#;
        fs::write(&path, text).unwrap();

        prune_documents(&config, &[DocumentKind::Tutorials]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), text);
    }
}
