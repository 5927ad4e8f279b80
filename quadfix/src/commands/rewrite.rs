//! Rewrite command: read the target file, apply the rule table, write it back.

use crate::fix::{LiteralRewriter, RewriteError, Rewritten, RuleOutcome};
use crate::rules::Rule;
use crate::utils::normalize_display_path;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// The file operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    /// Loading the document
    Read,
    /// Persisting the rewritten document
    Write,
}

impl fmt::Display for FileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "reading"),
            Self::Write => write!(f, "writing"),
        }
    }
}

/// Failure while rewriting a file.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// The target path does not exist
    #[error("{} does not exist", .path.display())]
    NotFound {
        /// Requested path
        path: PathBuf,
    },
    /// The file could not be read or written
    #[error("permission denied while {op} {}", .path.display())]
    PermissionDenied {
        /// Target path
        path: PathBuf,
        /// Operation that was refused
        op: FileOp,
    },
    /// The file is not valid UTF-8
    #[error("{} is not valid UTF-8 text", .path.display())]
    Encoding {
        /// Target path
        path: PathBuf,
        /// Decoder error
        #[source]
        source: std::string::FromUtf8Error,
    },
    /// Any other I/O failure, including short writes
    #[error("failed {op} {}: {source}", .path.display())]
    Io {
        /// Target path
        path: PathBuf,
        /// Operation that failed
        op: FileOp,
        /// Underlying error
        #[source]
        source: io::Error,
    },
    /// The rule table could not be applied
    #[error(transparent)]
    Rewrite(#[from] RewriteError),
}

impl FileError {
    fn from_io(path: &Path, op: FileOp, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound if op == FileOp::Read => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, op },
            _ => Self::Io { path, op, source },
        }
    }
}

/// Options for the rewrite command
#[derive(Debug, Default, Clone)]
pub struct RewriteOptions {
    /// Compute and report, but leave the file untouched
    pub dry_run: bool,
    /// Print per-rule match counts
    pub verbose: bool,
    /// Emit the report as JSON
    pub json: bool,
}

/// Summary of a rewrite, printed with `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteReport {
    /// File that was (or would be) rewritten
    pub file: String,
    /// Whether the file was left untouched on purpose
    pub dry_run: bool,
    /// Whether the rewritten text differs from the original
    pub changed: bool,
    /// Occurrences replaced across all rules
    pub total_matches: usize,
    /// Per-rule outcomes in table order
    pub rules: Vec<RuleOutcome>,
}

/// A rewrite that has been computed but not yet written.
#[derive(Debug, Clone)]
pub struct PlannedRewrite {
    path: PathBuf,
    original: String,
    rewritten: Rewritten,
}

impl PlannedRewrite {
    /// Path of the target file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The rewritten document
    #[must_use]
    pub fn content(&self) -> &str {
        &self.rewritten.content
    }

    /// Whether any rule changed the document
    #[must_use]
    pub fn changed(&self) -> bool {
        self.original != self.rewritten.content
    }

    /// Overwrite the target file with the rewritten document.
    ///
    /// The file is truncated first; a failure part-way through is not rolled back.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn commit(&self) -> Result<(), FileError> {
        fs::write(&self.path, self.rewritten.content.as_bytes())
            .map_err(|e| FileError::from_io(&self.path, FileOp::Write, e))
    }

    /// Build the report for this rewrite
    #[must_use]
    pub fn report(&self, dry_run: bool) -> RewriteReport {
        RewriteReport {
            file: normalize_display_path(&self.path),
            dry_run,
            changed: self.changed(),
            total_matches: self.rewritten.total_matches(),
            rules: self.rewritten.outcomes.clone(),
        }
    }
}

/// Read `path` and apply `rules` to its contents without touching the file.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, not UTF-8, or a rule is invalid.
pub fn plan_rewrite(path: &Path, rules: &[Rule]) -> Result<PlannedRewrite, FileError> {
    let bytes = fs::read(path).map_err(|e| FileError::from_io(path, FileOp::Read, e))?;
    let original = String::from_utf8(bytes).map_err(|source| FileError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;
    let rewritten = LiteralRewriter::new(rules).apply(&original)?;

    Ok(PlannedRewrite {
        path: path.to_path_buf(),
        original,
        rewritten,
    })
}

/// Rewrite `path` in place with `rules`.
///
/// The file is written even when no rule matched.
///
/// # Errors
///
/// Returns an error if reading, decoding, rewriting, or writing fails.
pub fn rewrite(path: &Path, rules: &[Rule]) -> Result<RewriteReport, FileError> {
    let planned = plan_rewrite(path, rules)?;
    planned.commit()?;
    Ok(planned.report(false))
}

/// Run the rewrite command, writing status output to `writer`.
///
/// # Errors
///
/// Returns an error if the rewrite fails or output cannot be written.
pub fn run_rewrite<W: Write>(
    path: &Path,
    rules: &[Rule],
    options: &RewriteOptions,
    mut writer: W,
) -> Result<RewriteReport> {
    let planned = plan_rewrite(path, rules)?;
    let report = planned.report(options.dry_run);

    if options.verbose && !options.json {
        eprintln!(
            "[VERBOSE] {} rule(s), {} occurrence(s) in {}",
            rules.len(),
            report.total_matches,
            report.file
        );
        crate::output::print_rule_table(&mut writer, &report.rules)?;
    }

    if options.dry_run {
        if options.json {
            crate::output::print_json(&mut writer, &report)?;
        } else {
            crate::output::print_dry_run(&mut writer, &report)?;
        }
        return Ok(report);
    }

    planned.commit()?;

    if options.json {
        crate::output::print_json(&mut writer, &report)?;
    } else {
        if report.total_matches == 0 && options.verbose {
            writeln!(writer, "{}", "No quadrant literals found.".dimmed())?;
        }
        crate::output::print_completion(&mut writer)?;
    }

    Ok(report)
}
