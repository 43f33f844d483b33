//! # Inline Parsing
//!
//! Splitter-chain inline parsing over the text of a single block.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the text of
//! inline-eligible blocks (paragraphs, headings, quotes, list items).
//!
//! Each pass takes the whole run sequence and only rewrites plain runs:
//! - Delimiter passes split on a literal pair (`` ` ``, `**`, `_`)
//! - Reference passes split out `![alt](url)` and `[text](url)` matches
//!
//! Styled runs are never re-split, so there is no nesting.
//!
//! ## Modules
//!
//! - **`types`**: `StyledTextRun` and `RunKind`
//! - **`kinds`**: Inline-specific types with owned delimiters (CodeSpan, Strong, Emphasis, Link, Image)
//! - **`delimiter`**: `split_runs_delimiter()` for paired delimiters
//! - **`links`**: `split_runs_image()` / `split_runs_link()` and the raw extractors
//! - **`parser`**: `text_to_runs()` main entry point
//!
//! ## Raw Zone Precedence
//!
//! Code spans go first: `` `[not](a link)` `` parses as a single code run.

pub mod delimiter;
pub mod kinds;
pub mod links;
pub mod parser;
pub mod types;

pub use delimiter::split_runs_delimiter;
pub use links::{extract_markdown_images, extract_markdown_links, split_runs_image, split_runs_link};
pub use parser::text_to_runs;
pub use types::{RunKind, StyledTextRun};
