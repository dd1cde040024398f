//! Flattening of `word/document.xml` into text plus comment anchors.

use std::collections::HashMap;

use anyhow::{Context, Result};
use roxmltree::{Document, Node};

use super::xml::{is_fallback, is_properties, is_word, leaf_text, word_attr};
use crate::types::CommentRange;

/// An anchor whose end may not have been seen yet.
#[derive(Debug)]
struct PendingRange {
    comment_id: String,
    start: usize,
    end: Option<usize>,
}

/// Walks the body in document order, tracking the current char offset.
#[derive(Debug, Default)]
struct BodyWalker {
    text: String,
    /// Length of `text` in chars.
    pos: usize,
    paragraphs: usize,
    pending: Vec<PendingRange>,
    by_id: HashMap<String, usize>,
}

impl BodyWalker {
    fn visit(&mut self, node: Node<'_, '_>) {
        if is_properties(&node) || is_fallback(&node) {
            return;
        }

        if let Some(text) = leaf_text(&node) {
            self.push_text(text);
            return;
        }

        if is_word(&node, "p") {
            if self.paragraphs > 0 {
                self.push_text("\n");
            }
            self.paragraphs += 1;
        } else if is_word(&node, "commentRangeStart") {
            if let Some(id) = word_attr(&node, "id") {
                self.range_start(id);
            }
            return;
        } else if is_word(&node, "commentRangeEnd") {
            if let Some(id) = word_attr(&node, "id") {
                self.range_end(id);
            }
            return;
        } else if is_word(&node, "commentReference") {
            if let Some(id) = word_attr(&node, "id") {
                self.reference(id);
            }
            return;
        }

        for child in node.children() {
            self.visit(child);
        }
    }

    fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
        self.pos += text.chars().count();
    }

    fn open(&mut self, id: &str, start: usize, end: Option<usize>) {
        self.by_id.insert(id.to_string(), self.pending.len());
        self.pending.push(PendingRange {
            comment_id: id.to_string(),
            start,
            end,
        });
    }

    fn range_start(&mut self, id: &str) {
        if !self.by_id.contains_key(id) {
            self.open(id, self.pos, None);
        }
    }

    fn range_end(&mut self, id: &str) {
        match self.by_id.get(id).copied() {
            Some(index) => {
                let range = &mut self.pending[index];
                if range.end.is_none() {
                    range.end = Some(self.pos);
                }
            }
            None => self.open(id, self.pos, Some(self.pos)),
        }
    }

    /// A reference closes a still-open range, or anchors a point comment.
    fn reference(&mut self, id: &str) {
        self.range_end(id);
    }

    fn finish(self) -> (String, Vec<CommentRange>) {
        let ranges = self
            .pending
            .into_iter()
            .map(|range| {
                let end = range.end.unwrap_or(range.start).max(range.start);
                CommentRange::new(range.comment_id, range.start, end)
            })
            .collect();
        (self.text, ranges)
    }
}

/// Extract the flattened body text and comment ranges from `document.xml`.
///
/// Paragraphs are separated by a single `\n`. Ranges are reported in the
/// order their anchors first appear.
pub fn parse_body(xml: &str) -> Result<(String, Vec<CommentRange>)> {
    let doc = Document::parse(xml).context("Failed to parse word/document.xml")?;
    let root = doc.root_element();

    let body = root
        .children()
        .find(|node| is_word(node, "body"))
        .context("word/document.xml has no w:body element")?;

    let mut walker = BodyWalker::default();
    for child in body.children() {
        walker.visit(child);
    }

    Ok(walker.finish())
}
