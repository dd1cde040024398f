//! Inline comment placement.
//!
//! Takes the flattened document text plus its comments and ranges, and
//! produces a new string where every resolvable comment is rendered next
//! to the text it annotates:
//!
//! ```text
//! span:  text[..start] + "[" + text[start..end] + "]" + " " + comments + text[end..]
//! point: text[..pos] + comments + text[pos..]
//! ```
//!
//! Ranges sharing the same `(start, end)` form one position group. A span
//! group is bracketed once no matter how many comments it carries; its
//! rendered comments are joined with a single space.
//!
//! Every group becomes one or two insertions at offsets of the original text.
//! The insertions are applied from the highest offset down, so no offset is
//! shifted by an earlier insertion. At a shared offset, span closings come
//! first, then point comments, then span openings. Spans with a shared start
//! or end therefore nest.

mod author;
mod render;


use std::collections::{HashMap, hash_map::Entry};

pub use author::{AuthorMode, should_show_authors};
pub use render::render_comment;

use crate::types::{Comment, CommentRange};

/// Counters describing what an annotation pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotateStats {
    /// Position groups that produced an insertion.
    pub groups_rendered: usize,
    /// Comments rendered across all groups.
    pub comments_rendered: usize,
    /// Ranges whose comment id did not resolve.
    pub ranges_dropped: usize,
}

/// Ranges anchored to one identical `(start, end)` pair.
#[derive(Debug)]
struct PositionGroup<'a> {
    start: usize,
    end: usize,
    comment_ids: Vec<&'a str>,
}

/// Where an insertion sits relative to others at the same offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EditKind {
    /// `] comments` after a span.
    Close,
    /// Comments anchored at a point.
    Point,
    /// `[` before a span.
    Open,
}

/// One insertion into the original text, at a char offset.
#[derive(Debug)]
struct Edit {
    pos: usize,
    kind: EditKind,
    tie: usize,
    insert: String,
}

impl PositionGroup<'_> {
    fn is_point(&self) -> bool {
        self.start == self.end
    }
}

/// Insert comments inline into `text`.
///
/// Ranges whose comment id is unknown are skipped. Inputs are never
/// modified; an empty `ranges` slice returns `text` unchanged.
pub fn annotate(
    text: &str,
    comments: &[Comment],
    ranges: &[CommentRange],
    mode: AuthorMode,
) -> String {
    annotate_with_stats(text, comments, ranges, mode).0
}

/// Same as [`annotate`], also reporting what was inserted.
pub fn annotate_with_stats(
    text: &str,
    comments: &[Comment],
    ranges: &[CommentRange],
    mode: AuthorMode,
) -> (String, AnnotateStats) {
    let mut stats = AnnotateStats::default();
    if ranges.is_empty() {
        return (text.to_string(), stats);
    }

    let lookup: HashMap<&str, &Comment> = comments.iter().map(|c| (c.id.as_str(), c)).collect();
    let show_author = should_show_authors(mode, comments);

    let mut edits: Vec<Edit> = Vec::new();

    for group in group_by_position(ranges) {
        let resolved: Vec<&Comment> = group
            .comment_ids
            .iter()
            .filter_map(|id| lookup.get(id).copied())
            .collect();
        stats.ranges_dropped += group.comment_ids.len() - resolved.len();

        if resolved.is_empty() {
            continue;
        }

        let combined = resolved
            .iter()
            .map(|comment| render_comment(comment, show_author))
            .collect::<Vec<_>>()
            .join(" ");

        if group.is_point() {
            edits.push(Edit {
                pos: group.start,
                kind: EditKind::Point,
                tie: 0,
                insert: combined,
            });
        } else {
            // Inner spans close first, outer spans open first.
            edits.push(Edit {
                pos: group.end,
                kind: EditKind::Close,
                tie: usize::MAX - group.start,
                insert: format!("] {}", combined),
            });
            edits.push(Edit {
                pos: group.start,
                kind: EditKind::Open,
                tie: usize::MAX - group.end,
                insert: "[".to_string(),
            });
        }

        stats.groups_rendered += 1;
        stats.comments_rendered += resolved.len();
    }

    // Sorted into output order, then applied from the last one back so every
    // offset still refers to the untouched text in front of it.
    edits.sort_by_key(|edit| (edit.pos, edit.kind, edit.tie));

    let mut result = text.to_string();
    for edit in edits.iter().rev() {
        result.insert_str(byte_offset(text, edit.pos), &edit.insert);
    }

    (result, stats)
}

/// Partition ranges by `(start, end)`, keeping first-appearance order.
fn group_by_position(ranges: &[CommentRange]) -> Vec<PositionGroup<'_>> {
    let mut index: HashMap<(usize, usize), usize> = HashMap::new();
    let mut groups: Vec<PositionGroup<'_>> = Vec::new();

    for range in ranges {
        match index.entry(range.span_key()) {
            Entry::Occupied(entry) => {
                groups[*entry.get()]
                    .comment_ids
                    .push(range.comment_id.as_str());
            }
            Entry::Vacant(entry) => {
                entry.insert(groups.len());
                groups.push(PositionGroup {
                    start: range.start_pos,
                    end: range.end_pos,
                    comment_ids: vec![range.comment_id.as_str()],
                });
            }
        }
    }

    groups
}

/// Byte index of the `pos`-th char, clamped to the end of `s`.
fn byte_offset(s: &str, pos: usize) -> usize {
    s.char_indices()
        .nth(pos)
        .map(|(index, _)| index)
        .unwrap_or(s.len())
}
