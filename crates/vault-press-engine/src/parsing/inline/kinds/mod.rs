//! # Inline Kinds
//!
//! Inline types that own their syntax delimiters. The parser refers to these
//! constants and never hardcodes `[[` itself.
//!
//! - **`WikiLink`**: `OPEN = b"[["`, `CLOSE = b"]]"`, `ALIAS = b'|'`

pub mod wikilink;

pub use wikilink::WikiLink;
