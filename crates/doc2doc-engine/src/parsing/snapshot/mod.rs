//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a parsed document to a stable, indented text
//!   outline (block type, block text, node tree) for `insta` snapshots
//! - **`invariants`**: Runtime checks for parser correctness (blocks trimmed
//!   and non-empty, one node per block, no empty text runs, no untagged parents)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is pinned by fixture snapshots
//! rather than a separate formal grammar.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
