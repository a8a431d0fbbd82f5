//! phototidy - maintenance commands for a static photography blog.

mod cli;
mod config;
mod content;
mod logger;
mod rename;
mod rewrite;
mod slug;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;
    run(&cli.command, &config)
}

fn run(command: &Commands, config: &SiteConfig) -> Result<()> {
    match command {
        Commands::Check { strict } => cli::check::check_references(config, *strict),
        Commands::Clean => cli::clean::clean_assets(config),
        Commands::Convert => cli::convert::convert_images(config),
        Commands::Rename { .. } => cli::rename::rename_assets(config),
        Commands::Relocate { .. } => cli::rename::relocate_assets(config),
        Commands::Rewrite { map, .. } => cli::rename::rewrite_from_mapping(config, map.as_deref()),
        Commands::Prune { documents } => cli::prune::prune_documents(config, documents),
        Commands::Covers => cli::covers::repair_covers(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config_at;
    use crate::content::DocumentKind;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_convert_rename_check_scenario() {
        let dir = TempDir::new().unwrap();
        let config = test_config_at(dir.path());
        let images = config.public_dir().join("images");
        fs::create_dir_all(&images).unwrap();
        for name in ["胶片.jpg", "cover.jpg"] {
            RgbImage::from_pixel(2, 2, Rgb([1, 2, 3]))
                .save_with_format(images.join(name), ImageFormat::Jpeg)
                .unwrap();
        }
        let tutorials = config.document_path(DocumentKind::Tutorials);
        fs::create_dir_all(tutorials.parent().unwrap()).unwrap();
        fs::write(
            &tutorials,
            r#"[{"featuredImageUrl": "/images/cover.jpg", "images": ["/images/胶片.webp"]}]"#,
        )
        .unwrap();

        run(&Commands::Convert, &config).unwrap();
        assert!(images.join("胶片.webp").exists());
        assert!(!images.join("胶片.jpg").exists());
        assert!(images.join("cover.jpg").exists());

        run(&Commands::Rename { strategy: None }, &config).unwrap();
        assert!(images.join("film.webp").exists());

        let saved: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&tutorials).unwrap()).unwrap();
        assert_eq!(saved[0]["images"][0], "/images/film.webp");
        assert_eq!(saved[0]["featuredImageUrl"], "/images/cover.jpg");

        run(&Commands::Check { strict: true }, &config).unwrap();
    }
}
