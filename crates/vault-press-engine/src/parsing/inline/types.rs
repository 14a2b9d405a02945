use crate::parsing::span::Span;

/// A parsed inline node with byte spans into the document text.
///
/// The nodes returned by [`super::parse_inline`] tile the input exactly:
/// concatenating every node's full span reproduces the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Text that isn't part of a wiki link.
    Text(Span),
    /// A wiki-style link `[[target]]` or `[[target|alias]]`.
    WikiLink {
        /// Full span including `[[`, `]]` and any stray third `]`.
        full: Span,
        /// Span of the target (page name).
        target: Span,
        /// Span of the alias if present (after the first `|`).
        alias: Option<Span>,
    },
}

impl InlineNode {
    pub fn full_span(&self) -> Span {
        match self {
            InlineNode::Text(span) => *span,
            InlineNode::WikiLink { full, .. } => *full,
        }
    }
}

/// Borrowed view of a wiki link's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkText<'a> {
    pub raw: &'a str,
    pub target: &'a str,
    pub alias: Option<&'a str>,
}

impl<'a> LinkText<'a> {
    pub fn from_spans(source: &'a str, full: Span, target: Span, alias: Option<Span>) -> Self {
        Self {
            raw: full.slice(source),
            target: target.slice(source),
            alias: alias.map(|a| a.slice(source)),
        }
    }

    /// Visible text of the rewritten link: the alias, or else the last
    /// path segment of the target (`[[notes/Plan]]` shows `Plan`).
    pub fn display_text(&self) -> &'a str {
        match self.alias {
            Some(alias) => alias,
            None => self.target.rsplit('/').next().unwrap_or(self.target),
        }
    }
}
