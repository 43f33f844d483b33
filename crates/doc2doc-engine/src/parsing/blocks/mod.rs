//! # Block Parsing
//!
//! Three-step block parsing over a whole document.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is split on blank lines into
//!    trimmed block strings
//! 2. **Classification** (`classify`): each block gets exactly one `BlockType`
//!    from ordered structural predicates
//! 3. **Construction** (`builder`): markers are stripped per type and the text
//!    goes through inline parsing into an `HtmlNode`
//!
//! ## Modules
//!
//! - **`types`**: `BlockType`
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence, BlockQuote, lists, Paragraph)
//! - **`segment`**: `markdown_to_blocks()`
//! - **`classify`**: `block_to_block_type()`
//! - **`builder`**: `block_to_html_node()` and `build_block()`
//!
//! ## Key Invariants
//!
//! - Blocks never interact once segmented
//! - Code blocks are raw zones: no inline parsing inside
//! - Classification is total; paragraph is the fallback

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use builder::{block_to_html_node, build_block, text_to_children};
pub use classify::block_to_block_type;
pub use segment::markdown_to_blocks;
pub use types::BlockType;
