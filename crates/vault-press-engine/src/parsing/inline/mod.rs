//! # Inline Parsing
//!
//! Cursor-based scan for wiki links over a whole document.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, WikiLink) and the `LinkText` view
//! - **`kinds`**: inline types with owned delimiters (WikiLink)
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `parse_inline()` entry point
//!
//! The output tiles the input, which is what lets the rewriter splice each
//! link at its own span instead of doing search-and-replace on link text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{InlineNode, LinkText};
