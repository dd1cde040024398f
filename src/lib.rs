//! docx-comments - inline reviewer comments from Word documents
//!
//! Reads a `.docx` file, pulls out its body text and reviewer comments, and
//! re-renders the text with each comment placed next to the text it refers to:
//!
//! ```text
//! Hello [world] [COMMENT: "This word needs clarification"], this is a test.
//! ```
//!
//! ## Module Structure
//!
//! - `annotate`: Comment placement and rendering (pure, no I/O)
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `docx`: `.docx` container parsing into text, comments and ranges
//! - `types`: Data shared between the parser and the annotator
//!
//! ## Example
//!
//! ```
//! use docx_comments::annotate::{AuthorMode, annotate};
//! use docx_comments::types::{Comment, CommentRange};
//!
//! let comments = vec![Comment::new("1", "Reviewer", "Add specific example")];
//! let ranges = vec![CommentRange::point("1", 19)];
//! let text = annotate(
//!     "Insert example here. More text follows.",
//!     &comments,
//!     &ranges,
//!     AuthorMode::Auto,
//! );
//!
//! assert_eq!(
//!     text,
//!     r#"Insert example here[COMMENT: "Add specific example"]. More text follows."#
//! );
//! ```

pub mod annotate;
pub mod cli;
pub mod config;
pub mod docx;
pub mod types;
