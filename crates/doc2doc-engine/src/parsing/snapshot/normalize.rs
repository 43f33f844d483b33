use crate::{
    html::{HtmlNode, RenderOptions},
    parsing::{ParseError, ParsedDoc, blocks::build_block},
};

/// Renders a parsed document as an indented outline.
///
/// Each block contributes a `[type] "text"` header followed by its node tree,
/// one node per line. Text values are shown with `Debug` escaping so line
/// breaks stay visible.
pub fn normalize(doc: &ParsedDoc<'_>) -> Result<String, ParseError> {
    let mut out = String::new();
    for b in &doc.blocks {
        out.push_str(&format!("[{}] {:?}\n", b.block_type, b.text));
        let node = build_block(b.text, b.block_type)?;
        outline(&node, 1, &mut out);
    }
    Ok(out)
}

fn outline(node: &HtmlNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let attrs = node.attributes().to_html(&RenderOptions::default());
    match node {
        HtmlNode::Leaf {
            tag: Some(tag),
            value,
            ..
        } => out.push_str(&format!("{indent}{tag}{attrs} {value:?}\n")),
        HtmlNode::Leaf { tag: None, value, .. } => {
            out.push_str(&format!("{indent}text {value:?}\n"));
        }
        HtmlNode::Parent { tag, children, .. } => {
            out.push_str(&format!("{indent}{tag}{attrs}\n"));
            for child in children {
                outline(child, depth + 1, out);
            }
        }
    }
}
