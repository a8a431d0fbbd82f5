//! `[clean]` section configuration.
//!
//! ```toml
//! [clean]
//! extensions = ["jpg", "jpeg", "NEF", "txt"]  # Deleted (case-insensitive)
//! preserve = ["robots.txt"]                   # Never deleted
//! duplicate_extension = "webp"                # Checked for duplicates
//! duplicates = "name"                         # name | content
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// How two files are judged duplicates of each other.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateMode {
    /// Same bare file name anywhere in the tree (default).
    #[default]
    Name,
    /// Same blake3 content digest.
    Content,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Extensions (without dot) deleted outright.
    pub extensions: Vec<String>,
    /// File names never deleted.
    pub preserve: Vec<String>,
    /// Extension scanned for duplicates; empty disables the duplicate pass.
    pub duplicate_extension: String,
    /// Duplicate detection mode.
    pub duplicates: DuplicateMode,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            extensions: ["jpg", "jpeg", "NEF", "txt"].map(String::from).to_vec(),
            preserve: vec!["robots.txt".to_string()],
            duplicate_extension: "webp".to_string(),
            duplicates: DuplicateMode::Name,
        }
    }
}

impl CleanConfig {
    const EXTENSIONS: FieldPath = FieldPath::new("clean.extensions");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(ext) = self.extensions.iter().find(|e| e.starts_with('.')) {
            diag.error_with_hint(
                Self::EXTENSIONS,
                format!("extension `{ext}` starts with a dot"),
                format!("write it as `{}`", ext.trim_start_matches('.')),
            );
        }
    }
}
