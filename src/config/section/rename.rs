//! `[rename]` section configuration.
//!
//! Controls the Han → ASCII filename transliteration.
//!
//! ```toml
//! [rename]
//! root = "public/images"         # Tree to rename
//! extensions = ["webp"]          # Files considered ([] = every file)
//! only_han = true                # Only names containing Han characters
//! directories = true             # Also rename directories (deepest first)
//! fallback = "hash"              # hash | deunicode
//! fallback_prefix = "image"      # `image-1234` style fallback names
//! order = "declared"             # declared | longest-first
//! journal = ".phototidy/renames.json"
//!
//! # Replaces the built-in dictionary when present
//! terms = [["胶片", "film"], ["相机", "camera"]]
//! # Appended after the (built-in or custom) dictionary
//! extra_terms = [["黄山", "huangshan"]]
//!
//! # Whole names mapped directly, bypassing the pipeline
//! [rename.exact]
//! "湿版摄影法.mp4" = "wet-plate-photography.mp4"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::slug::builtin;

/// Name used when the dictionary cannot produce an ASCII slug.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMode {
    /// `<prefix>-<hash % 10000>` (default).
    #[default]
    Hash,
    /// Transliterate with deunicode, hash only if that is empty too.
    Deunicode,
}

/// Order in which dictionary terms are applied.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TermOrder {
    /// As declared (default). Short terms may shadow longer ones.
    #[default]
    Declared,
    /// Longest term first, declaration order among equal lengths.
    LongestFirst,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameConfig {
    /// Tree to rename, relative to the project root.
    pub root: PathBuf,
    /// File extensions considered; empty means every file.
    pub extensions: Vec<String>,
    /// Only rename names containing Han characters.
    pub only_han: bool,
    /// Also rename directories.
    pub directories: bool,
    /// Fallback naming mode.
    pub fallback: FallbackMode,
    /// Prefix of hash fallback names.
    pub fallback_prefix: String,
    /// Dictionary application order.
    pub order: TermOrder,
    /// Replacement dictionary; `None` uses the built-in one.
    pub terms: Option<Vec<(String, String)>>,
    /// Terms appended after the dictionary.
    pub extra_terms: Vec<(String, String)>,
    /// Whole-name table; `None` uses the built-in one.
    pub exact: Option<BTreeMap<String, String>>,
    /// Rename journal written between the filesystem and JSON passes.
    pub journal: Option<PathBuf>,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            root: "public/images".into(),
            extensions: vec!["webp".to_string()],
            only_han: true,
            directories: true,
            fallback: FallbackMode::Hash,
            fallback_prefix: "image".to_string(),
            order: TermOrder::Declared,
            terms: None,
            extra_terms: Vec::new(),
            exact: None,
            journal: Some(".phototidy/renames.json".into()),
        }
    }
}

impl RenameConfig {
    const TERMS: FieldPath = FieldPath::new("rename.terms");
    const EXACT: FieldPath = FieldPath::new("rename.exact");
    const FALLBACK_PREFIX: FieldPath = FieldPath::new("rename.fallback_prefix");

    /// Effective dictionary terms: custom or built-in, then `extra_terms`.
    pub fn effective_terms(&self) -> Vec<(String, String)> {
        let mut terms = match &self.terms {
            Some(terms) => terms.clone(),
            None => builtin::terms(),
        };
        terms.extend(self.extra_terms.iter().cloned());
        terms
    }

    /// Effective whole-name table: custom or built-in.
    pub fn effective_exact(&self) -> BTreeMap<String, String> {
        self.exact.clone().unwrap_or_else(builtin::exact)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut seen = rustc_hash::FxHashSet::default();
        for (term, _) in self.effective_terms() {
            if term.is_empty() {
                diag.error(Self::TERMS, "dictionary terms must not be empty");
            } else if !seen.insert(term.clone()) {
                diag.error_with_hint(
                    Self::TERMS,
                    format!("duplicate term `{term}`"),
                    "each term may appear once across `terms` and `extra_terms`",
                );
            }
        }

        if self.exact.as_ref().is_some_and(|m| m.keys().any(String::is_empty)) {
            diag.error(Self::EXACT, "exact names must not be empty");
        }

        let prefix_ok = !self.fallback_prefix.is_empty()
            && self
                .fallback_prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !prefix_ok {
            diag.error_with_hint(
                Self::FALLBACK_PREFIX,
                format!("invalid fallback prefix `{}`", self.fallback_prefix),
                "use ASCII letters, digits, `-` or `_`",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        let rename = &config.rename;
        assert_eq!(rename.root, PathBuf::from("public/images"));
        assert_eq!(rename.extensions, vec!["webp"]);
        assert!(rename.only_han);
        assert!(rename.directories);
        assert_eq!(rename.fallback, FallbackMode::Hash);
        assert_eq!(rename.order, TermOrder::Declared);
        assert!(rename.effective_terms().iter().any(|(k, v)| k == "胶片" && v == "film"));
    }

    #[test]
    fn test_mode_parsing() {
        let config =
            test_parse_config("[rename]\nfallback = \"deunicode\"\norder = \"longest-first\"");
        assert_eq!(config.rename.fallback, FallbackMode::Deunicode);
        assert_eq!(config.rename.order, TermOrder::LongestFirst);
    }

    #[test]
    fn test_custom_terms_replace_builtin() {
        let config = test_parse_config(
            "[rename]\nterms = [[\"胶片\", \"film\"]]\nextra_terms = [[\"黄山\", \"huangshan\"]]",
        );
        assert_eq!(
            config.rename.effective_terms(),
            vec![
                ("胶片".to_string(), "film".to_string()),
                ("黄山".to_string(), "huangshan".to_string()),
            ]
        );
    }

    #[test]
    fn test_builtin_passes_validation() {
        let config = test_parse_config("");
        let mut diag = ConfigDiagnostics::new();
        config.rename.validate(&mut diag);
        assert!(diag.is_empty(), "{diag}");
    }

    #[test]
    fn test_duplicate_and_empty_terms() {
        let config = test_parse_config(
            "[rename]\nterms = [[\"胶片\", \"film\"], [\"\", \"x\"]]\nextra_terms = [[\"胶片\", \"negative\"]]",
        );
        let mut diag = ConfigDiagnostics::new();
        config.rename.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_bad_fallback_prefix() {
        let config = test_parse_config("[rename]\nfallback_prefix = \"图片\"");
        let mut diag = ConfigDiagnostics::new();
        config.rename.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
