//! `[relocate]` section configuration.
//!
//! A fixed table of moves applied by `phototidy relocate`. Paths are
//! root-relative URLs, resolved against `[paths] public`.
//!
//! ```toml
//! [[relocate.table]]
//! from = "/images/7.第七课  摄影用光"
//! to = "/images/lesson-07-lighting"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// One row of the relocation table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelocateEntry {
    pub from: String,
    pub to: String,
}

impl RelocateEntry {
    fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelocateConfig {
    pub table: Vec<RelocateEntry>,
}

impl Default for RelocateConfig {
    fn default() -> Self {
        Self {
            table: default_table(),
        }
    }
}

impl RelocateConfig {
    const TABLE: FieldPath = FieldPath::new("relocate.table");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut seen = rustc_hash::FxHashSet::default();
        for entry in &self.table {
            for path in [&entry.from, &entry.to] {
                if !path.starts_with('/') || path.len() < 2 {
                    diag.error_with_hint(
                        Self::TABLE,
                        format!("`{path}` is not a root-relative path"),
                        "paths start with `/` and are resolved against `[paths] public`",
                    );
                } else if path.ends_with('/') {
                    diag.error_with_hint(
                        Self::TABLE,
                        format!("`{path}` ends with `/`"),
                        "write folders without a trailing slash, e.g. `/images/lesson`",
                    );
                }
            }
            if !seen.insert(entry.from.as_str()) {
                diag.error(Self::TABLE, format!("`{}` is listed twice", entry.from));
            }
        }
    }
}

/// Lesson folders and gallery files renamed when the blog moved to ASCII URLs.
fn default_table() -> Vec<RelocateEntry> {
    const LESSONS: &[(&str, &str)] = &[
        ("1.第一课  摄影简史、相机的发展及现代摄影的范畴", "lesson-01-photography-history"),
        ("2.第二课  相机、附件及各种功能设置", "lesson-02-camera-settings"),
        ("3.第三课   摄影曝光原理（一）", "lesson-03-exposure-theory-1"),
        ("4..第四课  摄影曝光原理（二）", "lesson-04-exposure-theory-2"),
        ("5.第五课  摄影构图（一）", "lesson-05-composition-1"),
        ("6.第六课  摄影构图（二）", "lesson-06-composition-2"),
        ("7.第七课  摄影用光", "lesson-07-lighting"),
        ("8.第八课  摄影色彩的运用", "lesson-08-color-theory"),
    ];
    const GALLERY: &[(&str, &str)] = &[
        ("波澜不惊.webp", "calm-waters.webp"),
        ("海边风情.webp", "seaside-scenery.webp"),
        ("看海去.webp", "going-to-sea.webp"),
        ("瞪.webp", "stare.webp"),
        ("资源共享.webp", "resource-sharing.webp"),
        ("非常态中的常态.webp", "normal-in-abnormal.webp"),
    ];

    let lessons = LESSONS.iter().map(|(from, to)| {
        RelocateEntry::new(&format!("/images/{from}"), &format!("/images/{to}"))
    });
    let gallery = GALLERY.iter().map(|(from, to)| {
        RelocateEntry::new(
            &format!("/images/gallery/{from}"),
            &format!("/images/gallery/{to}"),
        )
    });
    lessons.chain(gallery).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_table() {
        let config = test_parse_config("");
        assert_eq!(config.relocate.table.len(), 14);
        assert_eq!(
            config.relocate.table[6],
            RelocateEntry::new("/images/7.第七课  摄影用光", "/images/lesson-07-lighting")
        );

        let mut diag = ConfigDiagnostics::new();
        config.relocate.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_custom_table_replaces_default() {
        let config = test_parse_config(
            "[[relocate.table]]\nfrom = \"/images/旧\"\nto = \"/images/old\"",
        );
        assert_eq!(config.relocate.table.len(), 1);
    }

    #[test]
    fn test_validate_relative_and_duplicate() {
        let config = test_parse_config(
            "[[relocate.table]]\nfrom = \"images/a\"\nto = \"/images/b\"\n\
             [[relocate.table]]\nfrom = \"images/a\"\nto = \"/images/c\"",
        );
        let mut diag = ConfigDiagnostics::new();
        config.relocate.validate(&mut diag);
        // two relative `from` paths plus one duplicate
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_validate_trailing_slash() {
        let config = test_parse_config(
            "[[relocate.table]]\nfrom = \"/images/A/\"\nto = \"/images/B\"",
        );
        let mut diag = ConfigDiagnostics::new();
        config.relocate.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
