//! Console output for the rewrite command.

use crate::commands::RewriteReport;
use crate::constants::COMPLETION_MESSAGE;
use crate::fix::RuleOutcome;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::io::Write;

/// Print the confirmation line after a successful rewrite.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_completion(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer, "{}", COMPLETION_MESSAGE.green())
}

/// Print the dry-run banner naming the file that would be rewritten.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_dry_run(writer: &mut impl Write, report: &RewriteReport) -> std::io::Result<()> {
    let verdict = if report.changed {
        format!("{} occurrence(s) would be rewritten", report.total_matches)
    } else {
        "nothing to rewrite".to_owned()
    };
    writeln!(
        writer,
        "{} {}: {}",
        "[DRY-RUN]".yellow(),
        report.file.bold(),
        verdict
    )
}

/// Helper to create a styled table
fn create_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);
    table
}

/// Print one row per rule with its match count.
///
/// Rules that matched nothing are dimmed rather than hidden.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_rule_table(writer: &mut impl Write, outcomes: &[RuleOutcome]) -> std::io::Result<()> {
    writeln!(writer, "\n{}", "Rule matches".bold().underline())?;

    let mut table = create_table(vec!["#", "Search", "Replace", "Matches"]);
    for (i, outcome) in outcomes.iter().enumerate() {
        let count = Cell::new(outcome.matches).set_alignment(CellAlignment::Right);
        let count = if outcome.matches == 0 {
            count.add_attribute(Attribute::Dim)
        } else {
            count.fg(Color::Green)
        };
        table.add_row(vec![
            Cell::new(i + 1).add_attribute(Attribute::Dim),
            Cell::new(outcome.rule.search),
            Cell::new(outcome.rule.replace).add_attribute(Attribute::Bold),
            count,
        ]);
    }

    writeln!(writer, "{table}")?;
    let total: usize = outcomes.iter().map(|o| o.matches).sum();
    writeln!(writer, "Total: {total}\n")?;
    Ok(())
}

/// Print the report as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn print_json(writer: &mut impl Write, report: &RewriteReport) -> anyhow::Result<()> {
    writeln!(writer, "{}", serde_json::to_string_pretty(report)?)?;
    Ok(())
}
