//! `[paths]` section configuration.
//!
//! ```toml
//! [paths]
//! public = "public"       # Static-asset root; URLs resolve against it
//! content = "src/data"    # Directory holding the JSON documents
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Static-asset root directory.
    pub public: PathBuf,
    /// Content directory containing the JSON documents.
    pub content: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            public: "public".into(),
            content: "src/data".into(),
        }
    }
}
