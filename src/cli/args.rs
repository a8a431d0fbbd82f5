//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::RewriteStrategy;
use crate::content::DocumentKind;

/// Maintenance commands for a static photography blog's assets
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: phototidy.toml)
    #[arg(short = 'C', long, global = true, default_value = "phototidy.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Project root directory (default: directory of the config file, or cwd)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check that every image referenced by the content documents exists
    #[command(visible_alias = "c")]
    Check {
        /// Exit with an error when references are missing
        #[arg(short, long)]
        strict: bool,
    },

    /// Delete raw formats and duplicate images, then empty directories
    Clean,

    /// Convert JPEG images to WebP, deleting the sources
    Convert,

    /// Transliterate Chinese file and directory names to ASCII
    #[command(visible_alias = "r")]
    Rename {
        /// How references in the documents are rewritten
        #[arg(short, long, value_enum)]
        strategy: Option<RewriteStrategy>,
    },

    /// Move the folders and files listed in `[relocate] table`
    Relocate {
        /// How references in the documents are rewritten
        #[arg(short, long, value_enum)]
        strategy: Option<RewriteStrategy>,
    },

    /// Rewrite document references from a saved rename mapping
    Rewrite {
        /// Mapping file (default: the rename journal)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        map: Option<PathBuf>,

        /// How references in the documents are rewritten
        #[arg(short, long, value_enum)]
        strategy: Option<RewriteStrategy>,
    },

    /// Drop list entries whose images no longer exist
    Prune {
        /// Documents to prune (default: tutorials)
        #[arg(value_enum)]
        documents: Vec<DocumentKind>,
    },

    /// Replace missing tutorial covers with the first WebP of their folder
    Covers,
}
