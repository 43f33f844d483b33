use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies a trimmed block into exactly one [`BlockType`].
///
/// Predicates run in order and the first match wins:
/// heading, code, quote, unordered list, ordered list, then paragraph.
/// The line-based predicates must hold for every line of the block.
///
/// Total: any input, including the empty string, gets a type.
pub fn block_to_block_type(block: &str) -> BlockType {
    if Heading::split(block).is_some() {
        return BlockType::Heading;
    }
    if CodeFence::encloses(block) {
        return BlockType::Code;
    }

    let lines = || block.split('\n');

    if lines().all(BlockQuote::is_quote_line) {
        BlockType::Quote
    } else if lines().all(UnorderedList::is_item) {
        BlockType::UnorderedList
    } else if lines()
        .enumerate()
        .all(|(i, line)| OrderedList::is_item_at(line, i))
    {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}
