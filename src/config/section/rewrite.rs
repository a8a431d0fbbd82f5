//! `[rewrite]` section configuration.
//!
//! ```toml
//! [rewrite]
//! strategy = "structured"   # structured | textual
//! ```

use serde::{Deserialize, Serialize};

/// How a rename mapping is applied to a JSON document.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RewriteStrategy {
    /// Look up each known reference field in the mapping (default).
    #[default]
    Structured,
    /// Replace every old path in the serialized document text.
    ///
    /// Matches inside longer paths are rewritten too.
    Textual,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    pub strategy: RewriteStrategy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_strategy_parsing() {
        assert_eq!(
            test_parse_config("").rewrite.strategy,
            RewriteStrategy::Structured
        );
        assert_eq!(
            test_parse_config("[rewrite]\nstrategy = \"textual\"").rewrite.strategy,
            RewriteStrategy::Textual
        );
    }
}
