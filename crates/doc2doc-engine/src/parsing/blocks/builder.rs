use crate::{
    html::{HtmlNode, text_run_to_html_node},
    parsing::{ParseError, inline::text_to_runs},
};

use super::{
    classify::block_to_block_type,
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    types::BlockType,
};

/// Builds the node for one block, classifying it first.
///
/// # Errors
/// Propagates [`ParseError::MalformedMarkdown`] from inline parsing.
pub fn block_to_html_node(block: &str) -> Result<HtmlNode, ParseError> {
    build_block(block, block_to_block_type(block))
}

/// Builds the node for a block whose type is already known.
///
/// Code blocks are emitted verbatim; every other type strips its syntax
/// markers and runs the remaining text through inline parsing.
pub fn build_block(block: &str, block_type: BlockType) -> Result<HtmlNode, ParseError> {
    match block_type {
        BlockType::Paragraph => Ok(HtmlNode::parent(
            "p",
            text_to_children(&Paragraph::join_lines(block))?,
        )),
        BlockType::Heading => heading_to_html_node(block),
        BlockType::Code => Ok(HtmlNode::parent(
            "pre",
            vec![HtmlNode::leaf("code", CodeFence::content(block))],
        )),
        BlockType::Quote => {
            let text = block
                .split('\n')
                .map(BlockQuote::strip_prefix)
                .collect::<Vec<_>>()
                .join("\n");
            Ok(HtmlNode::parent("blockquote", text_to_children(&text)?))
        }
        BlockType::UnorderedList => Ok(HtmlNode::parent(
            "ul",
            list_items(block, UnorderedList::strip_marker)?,
        )),
        BlockType::OrderedList => Ok(HtmlNode::parent(
            "ol",
            list_items(block, OrderedList::strip_marker)?,
        )),
    }
}

/// Inline-parses `text` and converts each run to a node.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    text_to_runs(text)?
        .iter()
        .map(text_run_to_html_node)
        .collect()
}

fn heading_to_html_node(block: &str) -> Result<HtmlNode, ParseError> {
    let Some((level, text)) = Heading::split(block) else {
        // Only reachable when a caller forces the type.
        return Err(ParseError::UnknownBlockType(format!(
            "{} (block does not open with a heading marker)",
            BlockType::Heading
        )));
    };
    Ok(HtmlNode::parent(format!("h{level}"), text_to_children(text)?))
}

fn list_items(block: &str, strip: fn(&str) -> &str) -> Result<Vec<HtmlNode>, ParseError> {
    block
        .split('\n')
        .map(|line| -> Result<HtmlNode, ParseError> {
            Ok(HtmlNode::parent("li", text_to_children(strip(line))?))
        })
        .collect()
}
