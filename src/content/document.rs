//! Loading and saving content documents.
//!
//! Documents are written back as pretty JSON with two-space indentation.
//! Key order is preserved (`serde_json/preserve_order`) and non-ASCII text
//! is written unescaped.

use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::DocumentKind;
use crate::config::SiteConfig;

/// Structural failure on a content document. Aborts the command.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("IO error on `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("malformed JSON in `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("`{0}`: {1}")]
    Invalid(PathBuf, String),
}

/// A parsed content document.
#[derive(Debug, Clone)]
pub struct Document {
    pub kind: DocumentKind,
    pub path: PathBuf,
    pub value: Value,
}

impl Document {
    /// Load the configured document of `kind`. A missing file is `None`.
    pub fn load(config: &SiteConfig, kind: DocumentKind) -> Result<Option<Self>, DocumentError> {
        Self::load_from(kind, &config.document_path(kind))
    }

    /// Load a document from an explicit path. A missing file is `None`.
    pub fn load_from(kind: DocumentKind, path: &Path) -> Result<Option<Self>, DocumentError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(DocumentError::Io(path.to_path_buf(), err)),
        };
        let value = serde_json::from_str(&text)
            .map_err(|err| DocumentError::Json(path.to_path_buf(), err))?;
        Ok(Some(Self {
            kind,
            path: path.to_path_buf(),
            value,
        }))
    }

    /// Pretty JSON text of the current value.
    pub fn to_pretty(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(&self.value)
            .map_err(|err| DocumentError::Json(self.path.clone(), err))
    }

    /// Replace the value with `text` parsed as JSON.
    ///
    /// Fails with [`DocumentError::Invalid`] when `text` is not valid JSON,
    /// leaving the value untouched.
    pub fn replace_text(&mut self, text: &str) -> Result<(), DocumentError> {
        self.value = serde_json::from_str(text).map_err(|err| {
            DocumentError::Invalid(self.path.clone(), format!("rewritten text is not JSON: {err}"))
        })?;
        Ok(())
    }

    /// Write the document back to its path.
    pub fn save(&self) -> Result<(), DocumentError> {
        let text = self.to_pretty()?;
        fs::write(&self.path, text).map_err(|err| DocumentError::Io(self.path.clone(), err))
    }
}
