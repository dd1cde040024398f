//! Output and diagnostics for the CLI.
//!
//! The annotated text goes to stdout (or a file); everything else is a
//! diagnostic. Each printer has a `_to` variant taking a writer so it can be
//! tested without touching the real streams.

use std::{
    io::{self, Write},
    path::Path,
};

use anyhow::Result;
use colored::Colorize;

use super::run::RunResult;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the annotated document to stdout.
pub fn print_formatted(formatted: &str) -> Result<()> {
    print_formatted_to(formatted, &mut io::stdout().lock())
}

pub fn print_formatted_to<W: Write>(formatted: &str, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", formatted)?;
    writer.flush()?;
    Ok(())
}

/// Confirm that the output file was written.
pub fn print_written(path: &Path) {
    print_written_to(path, &mut io::stdout().lock());
}

pub fn print_written_to<W: Write>(path: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} Output written to: {}",
        SUCCESS_MARK.green(),
        path.display()
    );
}

/// Report a missing input file.
pub fn print_input_not_found(path: &Path) {
    print_input_not_found_to(path, &mut io::stderr().lock());
}

pub fn print_input_not_found_to<W: Write>(path: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} Input file not found: {}",
        "Error:".bold().red(),
        path.display()
    );
}

/// Report a failure while parsing or formatting.
pub fn print_error(err: &anyhow::Error) {
    print_error_to(err, &mut io::stderr().lock());
}

pub fn print_error_to<W: Write>(err: &anyhow::Error, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {:#}",
        "Error processing file:".bold().red(),
        err
    );
}

/// Print what the run did. Only shown with `--verbose`.
pub fn print_summary(result: &RunResult) {
    print_summary_to(result, &mut io::stderr().lock());
}

pub fn print_summary_to<W: Write>(result: &RunResult, writer: &mut W) {
    if let Some(path) = &result.config_path {
        let _ = writeln!(writer, "{} {}", "config:".bold(), path.display());
    }
    let _ = writeln!(
        writer,
        "{} {} {}, {} {}, authors: {}",
        "extracted:".bold(),
        result.comment_count,
        plural(result.comment_count, "comment", "comments"),
        result.range_count,
        plural(result.range_count, "range", "ranges"),
        result.author_mode
    );
    let _ = writeln!(
        writer,
        "{} {} {} at {} {}",
        "inlined:".bold(),
        result.stats.comments_rendered,
        plural(result.stats.comments_rendered, "comment", "comments"),
        result.stats.groups_rendered,
        plural(result.stats.groups_rendered, "position", "positions"),
    );
    if result.stats.ranges_dropped > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} no known comment and {} skipped",
            "warning:".bold().yellow(),
            result.stats.ranges_dropped,
            plural(result.stats.ranges_dropped, "range references", "ranges reference"),
            plural(result.stats.ranges_dropped, "was", "were"),
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
