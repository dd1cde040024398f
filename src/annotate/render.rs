use crate::types::Comment;

/// Render one comment as an inline block.
///
/// The comment text is inserted verbatim; quotes and brackets inside it are
/// not escaped.
pub fn render_comment(comment: &Comment, show_author: bool) -> String {
    if show_author && !comment.author.is_empty() {
        format!("[COMMENT {}: \"{}\"]", comment.author, comment.text)
    } else {
        format!("[COMMENT: \"{}\"]", comment.text)
    }
}
