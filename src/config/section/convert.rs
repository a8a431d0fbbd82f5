//! `[convert]` section configuration.
//!
//! ```toml
//! [convert]
//! roots = ["public/images"]      # Directories walked for sources
//! extensions = ["jpg", "jpeg"]   # Source extensions (case-insensitive)
//! skip = ["cover.jpg"]           # File names left untouched
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Directories to convert, relative to the project root.
    pub roots: Vec<PathBuf>,
    /// Source extensions without dot.
    pub extensions: Vec<String>,
    /// Reserved file names that are never converted.
    pub skip: Vec<String>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            roots: vec!["public/images".into()],
            extensions: vec!["jpg".to_string(), "jpeg".to_string()],
            skip: vec!["cover.jpg".to_string()],
        }
    }
}

impl ConvertConfig {
    const EXTENSIONS: FieldPath = FieldPath::new("convert.extensions");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.extensions.is_empty() {
            diag.error(Self::EXTENSIONS, "at least one source extension is required");
        }
        if self.extensions.iter().any(|e| e.eq_ignore_ascii_case("webp")) {
            diag.error_with_hint(
                Self::EXTENSIONS,
                "`webp` cannot be a source extension",
                "converted files would overwrite themselves",
            );
        }
    }
}
