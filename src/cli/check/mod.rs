//! `phototidy check`: verify that referenced images exist.

mod report;

use anyhow::Result;

use crate::config::SiteConfig;
use crate::content::{Document, DocumentKind, refs};
use crate::utils::path::resolve_url;
use crate::utils::plural_count;
use crate::{debug, log};

use report::ValidationReport;

/// Check every reference and print the report.
///
/// Missing references fail the command only with `strict`.
pub fn check_references(config: &SiteConfig, strict: bool) -> Result<()> {
    let report = build_report(config)?;

    report.print()?;
    log!("check"; "{}", report);

    let missing = report.missing_count();
    if strict && missing > 0 {
        anyhow::bail!("check failed: {}", plural_count(missing, "missing image"));
    }
    Ok(())
}

/// Resolve each reference of each document against the public dir.
fn build_report(config: &SiteConfig) -> Result<ValidationReport> {
    let public = config.public_dir();
    let mut report = ValidationReport::default();

    for kind in DocumentKind::ALL {
        let Some(doc) = Document::load(config, kind)? else {
            debug!("check"; "{} not found, skipped", kind);
            continue;
        };

        for record in refs::records(&doc.value) {
            refs::visit(record, |field, url| {
                let path = resolve_url(public, url);
                let display = config.root_relative(&path).display().to_string();
                if path.exists() {
                    report.add_found(kind, display);
                } else {
                    report.add_missing(kind, field, display);
                }
            });
        }
    }

    Ok(report)
}
