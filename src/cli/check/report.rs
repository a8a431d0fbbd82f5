//! Validation report types and formatting.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::content::DocumentKind;
use crate::utils::plural_s;

/// A reference whose file does not exist.
#[derive(Debug, Clone)]
pub struct MissingRef {
    /// Field the reference was found in.
    pub field: &'static str,
    /// Resolved path, relative to the project root.
    pub target: String,
}

/// Found and missing references, grouped by document.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub found: BTreeMap<DocumentKind, Vec<String>>,
    pub missing: BTreeMap<DocumentKind, Vec<MissingRef>>,
}

impl ValidationReport {
    pub fn add_found(&mut self, kind: DocumentKind, target: String) {
        self.found.entry(kind).or_default().push(target);
    }

    pub fn add_missing(&mut self, kind: DocumentKind, field: &'static str, target: String) {
        self.missing
            .entry(kind)
            .or_default()
            .push(MissingRef { field, target });
    }

    pub fn found_count(&self) -> usize {
        self.found.values().map(Vec::len).sum()
    }

    pub fn missing_count(&self) -> usize {
        self.missing.values().map(Vec::len).sum()
    }

    /// Print to stdout: one line per resolved reference, then the missing
    /// ones grouped by document.
    pub fn print(&self) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock())
    }

    fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        for targets in self.found.values() {
            for target in targets {
                writeln!(out, "{} found: {}", "✓".green(), target)?;
            }
        }

        if self.missing.is_empty() {
            return Ok(());
        }
        writeln!(out)?;

        let doc_count = self.missing.len();
        let error_count = self.missing_count();
        writeln!(
            out,
            "{} {}",
            "missing".red().bold(),
            format!(
                "({doc_count} document{}, {error_count} reference{})",
                plural_s(doc_count),
                plural_s(error_count)
            )
            .dimmed()
        )?;

        for (kind, refs) in &self.missing {
            writeln!(out, "{}{}{}", "[".dimmed(), kind.cyan(), "]".dimmed())?;
            for r in refs {
                writeln!(out, "{} {} {}", "→".red(), r.target, r.field.dimmed())?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let missing = self.missing_count();
        if missing == 0 {
            write!(
                f,
                "{} ({} checked)",
                "all image paths resolve".green(),
                self.found_count()
            )
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                missing.to_string().red().bold(),
                format!("missing image{}", plural_s(missing)).dimmed()
            )
        }
    }
}
