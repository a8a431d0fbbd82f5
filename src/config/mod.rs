//! Site configuration management for `phototidy.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # One module per TOML section
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # Config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Every field has a default matching the blog layout (`public/`,
//! `src/data/*.json`), so the file is optional.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    CleanConfig, ContentConfig, ConvertConfig, DuplicateMode, FallbackMode, PathsConfig,
    RelocateConfig, RelocateEntry, RenameConfig, RewriteConfig, RewriteStrategy, TermOrder,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    content::DocumentKind,
    debug, log,
    utils::path::{fs::expand_under, normalize_path},
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing phototidy.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file; empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub clean: CleanConfig,

    #[serde(default)]
    pub convert: ConvertConfig,

    #[serde(default)]
    pub rename: RenameConfig,

    #[serde(default)]
    pub rewrite: RewriteConfig,

    #[serde(default)]
    pub relocate: RelocateConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from `--root` (or cwd) for the config file. Without
    /// one, defaults apply and the project root is `--root` or cwd.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let start = cli
            .root
            .as_deref()
            .map_or_else(|| cwd.clone(), |root| expand_under(&cwd, root));

        let found = find_config_file(&start, &cli.config);
        let mut config = match &found {
            Some(path) => Self::from_path(path)?,
            None => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                Self::default()
            }
        };

        let root = match (&cli.root, &found) {
            (None, Some(path)) => path.parent().map(Path::to_path_buf).unwrap_or(cwd),
            _ => start,
        };

        config.config_path = found.unwrap_or_default();
        config.finalize(&root);
        config.apply_command_options(cli);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {} are ignored:", display_path);
        for field in fields {
            println!("- {field}");
        }
    }

    /// Resolve every configured path against the project root.
    fn finalize(&mut self, root: &Path) {
        let root = normalize_path(root);

        self.paths.public = expand_under(&root, &self.paths.public);
        self.paths.content = expand_under(&root, &self.paths.content);
        self.convert.roots = self
            .convert
            .roots
            .iter()
            .map(|p| expand_under(&root, p))
            .collect();
        self.rename.root = expand_under(&root, &self.rename.root);
        self.rename.journal = self.rename.journal.take().map(|j| expand_under(&root, &j));

        self.root = root;
    }

    /// Apply command-specific overrides.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Rename { strategy }
            | Commands::Relocate { strategy }
            | Commands::Rewrite { strategy, .. } => {
                Self::update_option(&mut self.rewrite.strategy, strategy.as_ref());
            }
            Commands::Check { .. }
            | Commands::Clean
            | Commands::Convert
            | Commands::Prune { .. }
            | Commands::Covers => {}
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Static-asset root that URLs resolve against.
    pub fn public_dir(&self) -> &Path {
        &self.paths.public
    }

    /// Path of a content document.
    pub fn document_path(&self, kind: DocumentKind) -> PathBuf {
        let name = match kind {
            DocumentKind::Tutorials => &self.content.tutorials,
            DocumentKind::Galleries => &self.content.galleries,
            DocumentKind::Photographer => &self.content.photographer,
        };
        self.paths.content.join(name)
    }

    /// Path relative to the project root, for log output.
    pub fn root_relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(self.get_root()).unwrap_or(path)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.as_os_str().is_empty() && !self.config_path.exists() {
            anyhow::bail!(ConfigError::Validation("config file not found".into()));
        }

        let mut diag = ConfigDiagnostics::new();

        self.clean.validate(&mut diag);
        self.convert.validate(&mut diag);
        self.rename.validate(&mut diag);
        self.relocate.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// Default config rooted at `root` with every path resolved.
#[cfg(test)]
pub fn test_config_at(root: &Path) -> SiteConfig {
    let mut config = SiteConfig::default();
    config.finalize(root);
    config
}

// ============================================================================
// tests
// ============================================================================
