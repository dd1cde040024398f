//! WordprocessingML helpers shared by the part parsers.

use roxmltree::Node;

pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const MC_NS: &str = "http://schemas.openxmlformats.org/markup-compatibility/2006";

/// True if `node` is the `w:<name>` element.
pub fn is_word(node: &Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name && node.tag_name().namespace() == Some(W_NS)
}

/// Read a `w:`-namespaced attribute.
pub fn word_attr<'a>(node: &Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute((W_NS, name))
}

/// Text contributed by a single leaf element, if any.
///
/// Deleted text (`w:delText`) and field instructions (`w:instrText`) yield
/// nothing.
pub fn leaf_text<'a>(node: &Node<'a, '_>) -> Option<&'a str> {
    if !node.is_element() || node.tag_name().namespace() != Some(W_NS) {
        return None;
    }
    match node.tag_name().name() {
        "t" => Some(node.text().unwrap_or("")),
        "tab" => Some("\t"),
        "br" | "cr" => Some("\n"),
        "noBreakHyphen" => Some("-"),
        _ => None,
    }
}

/// Property containers whose children never hold document text.
pub fn is_properties(node: &Node<'_, '_>) -> bool {
    node.tag_name().namespace() == Some(W_NS)
        && matches!(
            node.tag_name().name(),
            "pPr" | "rPr" | "sectPr" | "tblPr" | "tblGrid" | "trPr" | "tcPr"
        )
}

/// `mc:Fallback` duplicates the content of its sibling `mc:Choice`.
pub fn is_fallback(node: &Node<'_, '_>) -> bool {
    node.tag_name().namespace() == Some(MC_NS) && node.tag_name().name() == "Fallback"
}
