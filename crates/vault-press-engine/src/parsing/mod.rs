pub mod inline;
pub mod span;

pub use inline::{InlineNode, LinkText, parse_inline};
pub use span::Span;
