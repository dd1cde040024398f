//! Data shared between the document parser and the annotator.

/// A reviewer comment extracted from a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub text: String,
}

impl Comment {
    pub fn new(id: impl Into<String>, author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            text: text.into(),
        }
    }
}

/// Anchors a comment to a region of the document text.
///
/// Positions are 0-based `char` offsets into the flattened text, with
/// `start_pos <= end_pos`. When both are equal the range is a *point*:
/// the comment sits at a location and covers no text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRange {
    pub comment_id: String,
    pub start_pos: usize,
    pub end_pos: usize,
}

impl CommentRange {
    pub fn new(comment_id: impl Into<String>, start_pos: usize, end_pos: usize) -> Self {
        Self {
            comment_id: comment_id.into(),
            start_pos,
            end_pos,
        }
    }

    pub fn point(comment_id: impl Into<String>, pos: usize) -> Self {
        Self::new(comment_id, pos, pos)
    }

    pub fn is_point(&self) -> bool {
        self.start_pos == self.end_pos
    }

    /// Key used to group ranges anchored to the same region.
    pub fn span_key(&self) -> (usize, usize) {
        (self.start_pos, self.end_pos)
    }
}

/// Everything the annotator needs from a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub text: String,
    pub comments: Vec<Comment>,
    pub ranges: Vec<CommentRange>,
}
