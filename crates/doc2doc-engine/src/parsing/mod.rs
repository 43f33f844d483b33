pub mod blocks;
pub mod error;
pub mod inline;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use error::ParseError;

use crate::html::HtmlNode;

use blocks::{BlockType, block_to_block_type, build_block, markdown_to_blocks};

/// One segmented block with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedBlock<'a> {
    /// Trimmed block text, borrowed from the document.
    pub text: &'a str,
    pub block_type: BlockType,
}

#[derive(Debug)]
pub struct ParsedDoc<'a> {
    pub blocks: Vec<ParsedBlock<'a>>,
}

/// Segments and classifies a document without building any nodes.
pub fn parse_document(markdown: &str) -> ParsedDoc<'_> {
    let blocks: Vec<ParsedBlock<'_>> = markdown_to_blocks(markdown)
        .into_iter()
        .map(|text| {
            let block_type = block_to_block_type(text);
            log::trace!("classified block as {block_type}: {text:?}");
            ParsedBlock { text, block_type }
        })
        .collect();

    log::debug!("segmented document into {} blocks", blocks.len());
    ParsedDoc { blocks }
}

/// Converts a whole document into a `div` holding one node per block.
///
/// # Errors
/// The first [`ParseError`] raised by any block; conversion stops there.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, ParseError> {
    let doc = parse_document(markdown);
    let children = doc
        .blocks
        .iter()
        .map(|b| build_block(b.text, b.block_type))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HtmlNode::parent("div", children))
}
