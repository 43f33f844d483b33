//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = "\`"`, split before anything else
//! - **`Strong`** / **`Emphasis`**: `**` and `_` delimiter pairs
//! - **`Image`** / **`Link`**: `![alt](url)` and `[text](url)` patterns
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The splitters call these constants; they never hardcode `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::{Image, Link};
