//! Author disclosure policy.

use std::{collections::HashSet, fmt};

use clap::ValueEnum;
use serde::Deserialize;

use crate::types::Comment;

/// Controls whether rendered comments carry their author's name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(from = "String")]
pub enum AuthorMode {
    /// Never show authors.
    Never,
    /// Always show authors.
    Always,
    /// Show authors only when the document has more than one.
    #[default]
    Auto,
}

impl From<&str> for AuthorMode {
    /// Unrecognized values fall back to `Auto`.
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "never" => AuthorMode::Never,
            "always" => AuthorMode::Always,
            _ => AuthorMode::Auto,
        }
    }
}

impl From<String> for AuthorMode {
    fn from(value: String) -> Self {
        AuthorMode::from(value.as_str())
    }
}

impl fmt::Display for AuthorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorMode::Never => write!(f, "never"),
            AuthorMode::Always => write!(f, "always"),
            AuthorMode::Auto => write!(f, "auto"),
        }
    }
}

/// Decide whether authors are shown for this set of comments.
///
/// In `Auto` mode the distinct authors are counted over every supplied
/// comment, including comments no range points at.
pub fn should_show_authors(mode: AuthorMode, comments: &[Comment]) -> bool {
    match mode {
        AuthorMode::Never => false,
        AuthorMode::Always => true,
        AuthorMode::Auto => {
            let authors: HashSet<&str> = comments.iter().map(|c| c.author.as_str()).collect();
            authors.len() > 1
        }
    }
}
