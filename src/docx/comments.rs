//! Parsing of `word/comments.xml`.

use anyhow::{Context, Result};
use roxmltree::{Document, Node};

use super::xml::{is_word, leaf_text, word_attr};
use crate::types::Comment;

/// Parse every `w:comment` in the comments part.
///
/// Comments without a `w:id` are skipped. A missing author becomes an
/// empty string. Multi-paragraph comment bodies are joined with a space.
pub fn parse_comments(xml: &str) -> Result<Vec<Comment>> {
    let doc = Document::parse(xml).context("Failed to parse word/comments.xml")?;
    let root = doc.root_element();

    let comments = root
        .children()
        .filter(|node| is_word(node, "comment"))
        .filter_map(|node| {
            let id = word_attr(&node, "id")?;
            let author = word_attr(&node, "author").unwrap_or("");
            Some(Comment::new(id, author, comment_text(&node)))
        })
        .collect();

    Ok(comments)
}

fn comment_text(comment: &Node<'_, '_>) -> String {
    comment
        .descendants()
        .filter(|node| is_word(node, "p"))
        // Text of a nested paragraph is already part of its outer one.
        .filter(|node| !node.ancestors().skip(1).any(|a| is_word(&a, "p")))
        .map(|paragraph| {
            paragraph
                .descendants()
                .filter_map(|node| leaf_text(&node))
                .collect::<String>()
        })
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
