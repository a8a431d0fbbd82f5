//! Substring dictionary for transliteration.

use std::collections::BTreeMap;

use crate::config::{RenameConfig, TermOrder};

/// Ordered substring replacements plus a whole-name table.
///
/// Replacement is repeated global substring substitution, not tokenized
/// translation: every term is applied to the output of the previous one.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    terms: Vec<(String, String)>,
    exact: BTreeMap<String, String>,
}

impl Dictionary {
    /// Build a dictionary, ordering terms as requested.
    pub fn new(
        mut terms: Vec<(String, String)>,
        exact: BTreeMap<String, String>,
        order: TermOrder,
    ) -> Self {
        if order == TermOrder::LongestFirst {
            // Stable: equal lengths keep declaration order.
            terms.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
        }
        Self { terms, exact }
    }

    /// Dictionary described by the `[rename]` section.
    pub fn from_config(config: &RenameConfig) -> Self {
        Self::new(
            config.effective_terms(),
            config.effective_exact(),
            config.order,
        )
    }

    /// Direct mapping for a whole name, if any.
    pub fn exact(&self, name: &str) -> Option<&str> {
        self.exact.get(name).map(String::as_str)
    }

    /// Apply every term in order.
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (term, replacement) in &self.terms {
            if result.contains(term.as_str()) {
                result = result.replace(term.as_str(), replacement);
            }
        }
        result
    }
}
