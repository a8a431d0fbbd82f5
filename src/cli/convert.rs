//! `phototidy convert`: JPEG to WebP.
//!
//! Each source is decoded, flattened to 8-bit RGB and written as
//! `<stem>.webp` next to it. The source is deleted only after the WebP was
//! written. `image` encodes WebP losslessly.
//!
//! A WebP left from an earlier run is replaced with a warning. Two sources
//! sharing a stem (`x.jpg`, `x.jpeg`) never overwrite each other: the second
//! one is kept and reported.

use anyhow::{Context, Result};
use image::ImageFormat;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ConvertConfig, SiteConfig};
use crate::logger::ProgressLine;
use crate::utils::plural_count;
use crate::utils::walk::{collect_files, has_extension};
use crate::{debug, log};

/// Convert every source image under the configured roots.
pub fn convert_images(config: &SiteConfig) -> Result<()> {
    let settings = &config.convert;
    let mut sources = Vec::new();
    for root in &settings.roots {
        if !root.is_dir() {
            log!("convert"; "{} not found, skipped", config.root_relative(root).display());
            continue;
        }
        sources.extend(collect_sources(root, settings));
    }

    if sources.is_empty() {
        log!("convert"; "nothing to convert");
        return Ok(());
    }

    let progress = ProgressLine::new("convert", &[("webp", sources.len())]);
    let mut written = FxHashSet::default();
    let mut failed = 0;
    for source in &sources {
        let target = source.with_extension("webp");
        if written.contains(&target) {
            log!(
                "error";
                "{} would overwrite {} converted in this run, kept",
                config.root_relative(source).display(),
                config.root_relative(&target).display()
            );
            failed += 1;
            continue;
        }
        if target.exists() {
            log!("warning"; "replacing existing {}", config.root_relative(&target).display());
        }

        match convert_one(source, &target) {
            Ok(()) => {
                debug!("convert"; "{} -> {}", source.display(), target.display());
                progress.inc("webp");
                written.insert(target);
            }
            Err(err) => {
                log!("error"; "{:#}", err);
                failed += 1;
            }
        }
    }
    let converted = progress.current("webp");
    progress.finish();

    if failed > 0 {
        log!("convert"; "{} failed", plural_count(failed, "image"));
    }
    log!("done"; "converted {}", plural_count(converted, "image"));
    Ok(())
}

/// Files under `root` with a source extension and a non-reserved name.
fn collect_sources(root: &Path, settings: &ConvertConfig) -> Vec<PathBuf> {
    collect_files(root)
        .into_iter()
        .filter(|path| has_extension(path, &settings.extensions))
        .filter(|path| {
            let name = path.file_name().map(|n| n.to_string_lossy());
            !name.is_some_and(|name| settings.skip.iter().any(|s| *s == name))
        })
        .collect()
}

/// Convert one image to `target`, then delete the source.
fn convert_one(source: &Path, target: &Path) -> Result<()> {
    let image = image::open(source)
        .with_context(|| format!("failed to decode {}", source.display()))?
        .to_rgb8();
    image
        .save_with_format(target, ImageFormat::WebP)
        .with_context(|| format!("failed to write {}", target.display()))?;

    fs::remove_file(source)
        .with_context(|| format!("converted but failed to delete {}", source.display()))?;
    Ok(())
}
