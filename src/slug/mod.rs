//! Han → ASCII name transliteration.
//!
//! # Pipeline
//!
//! ```text
//! "胶片 相机（二）.webp"
//!     │ exact table hit? ──────────────────────► mapped name
//!     │ split extension (files only)
//!     ▼
//! "胶片 相机（二）"  ── dictionary ──►  "film camera（二）"
//!     │ [^\w\-.] → "-",  -+ → "-",  trim "-"
//!     ▼
//! "film-camera-二" ── still Han? ──► fallback (hash | deunicode)
//!     │ re-attach extension
//!     ▼
//! "image-4821.webp"
//! ```
//!
//! The cleanup stage is idempotent, so running the pipeline on its own
//! output changes nothing. The dictionary stage is only stable once no
//! term matches.

pub mod builtin;
mod dictionary;

pub use dictionary::Dictionary;

use regex::Regex;
use std::sync::LazyLock;

use crate::config::{FallbackMode, RenameConfig};
use crate::utils::hash;

/// Characters outside `\w`, `-` and `.` become separators.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\-.]").unwrap());

/// Runs of separators collapse to one.
static DASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Check for CJK Unified Ideographs (`U+4E00..=U+9FFF`).
pub fn contains_han(s: &str) -> bool {
    s.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c))
}

/// Split a file name into stem and extension (with dot).
///
/// Leading dots belong to the stem: `".hidden"` has no extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    let leading = name.len() - name.trim_start_matches('.').len();
    match name[leading..].rfind('.') {
        Some(i) => name.split_at(leading + i),
        None => (name, ""),
    }
}

/// Replace disallowed characters, collapse and trim separators.
fn cleanup(text: &str) -> String {
    let replaced = NON_WORD.replace_all(text, "-");
    let collapsed = DASHES.replace_all(&replaced, "-");
    collapsed.trim_matches('-').to_string()
}

/// Name transliterator configured with a dictionary and fallback policy.
pub struct Transliterator<'a> {
    dictionary: &'a Dictionary,
    fallback: FallbackMode,
    prefix: &'a str,
}

impl<'a> Transliterator<'a> {
    pub fn new(dictionary: &'a Dictionary, fallback: FallbackMode, prefix: &'a str) -> Self {
        Self {
            dictionary,
            fallback,
            prefix,
        }
    }

    pub fn from_config(dictionary: &'a Dictionary, config: &'a RenameConfig) -> Self {
        Self::new(dictionary, config.fallback, &config.fallback_prefix)
    }

    /// Transliterate a file name, keeping its extension.
    pub fn file_name(&self, name: &str) -> String {
        if let Some(mapped) = self.dictionary.exact(name) {
            return mapped.to_string();
        }
        let (stem, ext) = split_extension(name);
        format!("{}{}", self.slug(stem), ext)
    }

    /// Transliterate a directory name as a whole.
    pub fn dir_name(&self, name: &str) -> String {
        if let Some(mapped) = self.dictionary.exact(name) {
            return mapped.to_string();
        }
        self.slug(name)
    }

    fn slug(&self, stem: &str) -> String {
        let slug = cleanup(&self.dictionary.apply(stem));
        if !slug.is_empty() && !contains_han(&slug) {
            return slug;
        }

        if self.fallback == FallbackMode::Deunicode {
            let ascii = cleanup(&deunicode::deunicode(stem).to_lowercase());
            if !ascii.is_empty() {
                return ascii;
            }
        }
        self.hash_name(stem)
    }

    /// `<prefix>-<n>` with `n < 10000`; different stems may collide.
    fn hash_name(&self, stem: &str) -> String {
        format!("{}-{}", self.prefix, hash::compute(stem) % 10000)
    }
}
