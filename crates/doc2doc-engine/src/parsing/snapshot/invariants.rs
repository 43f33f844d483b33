use crate::{html::HtmlNode, parsing::ParsedDoc};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Every block is non-empty and already trimmed
/// - The root is a `div` with exactly one child per block
/// - No parent has an empty tag
/// - No untagged (plain text) leaf is empty
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &ParsedDoc<'_>, root: &HtmlNode) {
    for b in &doc.blocks {
        assert!(!b.text.is_empty(), "empty block emitted");
        assert_eq!(b.text, b.text.trim(), "block not trimmed: {:?}", b.text);
    }
    assert_eq!(root.tag(), Some("div"), "root is not a div: {root:?}");
    assert_eq!(
        root.children().len(),
        doc.blocks.len(),
        "expected one node per block"
    );
    check_node(root);
}

fn check_node(node: &HtmlNode) {
    match node {
        HtmlNode::Leaf {
            tag: None, value, ..
        } => assert!(!value.is_empty(), "empty text run emitted"),
        HtmlNode::Leaf { .. } => {}
        HtmlNode::Parent { tag, children, .. } => {
            assert!(!tag.is_empty(), "parent without tag: {node:?}");
            children.iter().for_each(check_node);
        }
    }
}
