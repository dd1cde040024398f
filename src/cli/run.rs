use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::args::Arguments;
use crate::annotate::{AnnotateStats, AuthorMode, annotate_with_stats};
use crate::config::load_config;
use crate::docx::extract_docx;

/// Everything a successful run produced.
#[derive(Debug)]
pub struct RunResult {
    pub formatted: String,
    pub author_mode: AuthorMode,
    /// Config file that was applied, if any.
    pub config_path: Option<PathBuf>,
    pub comment_count: usize,
    pub range_count: usize,
    pub stats: AnnotateStats,
}

/// Environment variable consulted when `--authors` is not given.
pub const AUTHORS_ENV: &str = "DOCX_COMMENTS_AUTHORS";

/// Resolve the author mode: CLI flag, then environment, then config file.
///
/// The environment value goes through the same lenient parse as the config
/// file, so an unknown value means `auto`.
pub fn resolve_author_mode(
    flag: Option<AuthorMode>,
    env_value: Option<&str>,
    config_mode: AuthorMode,
) -> AuthorMode {
    flag.or_else(|| env_value.map(AuthorMode::from))
        .unwrap_or(config_mode)
}

/// Extract and annotate the input document.
///
/// The caller is expected to have checked that the input exists.
pub fn run(args: &Arguments) -> Result<RunResult> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let loaded = load_config(&cwd)?;
    let env_value = env::var(AUTHORS_ENV).ok();
    let author_mode =
        resolve_author_mode(args.authors, env_value.as_deref(), loaded.config.authors);

    let document = extract_docx(&args.input)?;
    let (formatted, stats) = annotate_with_stats(
        &document.text,
        &document.comments,
        &document.ranges,
        author_mode,
    );

    Ok(RunResult {
        formatted,
        author_mode,
        config_path: loaded.path,
        comment_count: document.comments.len(),
        range_count: document.ranges.len(),
        stats,
    })
}

pub fn write_output(path: &Path, formatted: &str) -> Result<()> {
    fs::write(path, formatted)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
