//! CLI argument definitions using clap.
//!
//! The tool takes one `.docx` file and prints (or writes) its text with the
//! reviewer comments inlined.

use std::path::PathBuf;

use clap::Parser;

use crate::annotate::AuthorMode;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// The .docx file to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file path. If not specified, prints to stdout
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// How to display comment authors [default: $DOCX_COMMENTS_AUTHORS, the config file's `authors`, or auto]
    #[arg(long, value_enum)]
    pub authors: Option<AuthorMode>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
