//! `[content]` section configuration.
//!
//! File names of the JSON documents, relative to `[paths] content`.
//!
//! ```toml
//! [content]
//! tutorials = "tutorials.json"
//! galleries = "galleries.json"
//! photographer = "photographer.json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub tutorials: PathBuf,
    pub galleries: PathBuf,
    pub photographer: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            tutorials: "tutorials.json".into(),
            galleries: "galleries.json".into(),
            photographer: "photographer.json".into(),
        }
    }
}
