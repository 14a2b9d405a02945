use crate::models::{DocumentPath, PathIndex};
use crate::parsing::{InlineNode, LinkText, parse_inline};

/// What a single wiki link turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Resolved { document: DocumentPath, url: String },
    /// No document matched; the link was replaced by a bold placeholder.
    Unresolved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkResolution {
    /// The original `[[...]]` text.
    pub raw: String,
    pub target: String,
    pub outcome: LinkOutcome,
}

impl LinkResolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self.outcome, LinkOutcome::Resolved { .. })
    }
}

/// Replace every wiki link in `text` with a markdown link or an unresolved
/// placeholder, splicing at each link's own span.
pub fn resolve_links(
    text: &str,
    index: &PathIndex,
    url_base: &str,
) -> (String, Vec<LinkResolution>) {
    let mut out = String::with_capacity(text.len());
    let mut resolutions = Vec::new();

    for node in parse_inline(text) {
        match node {
            InlineNode::Text(span) => out.push_str(span.slice(text)),
            InlineNode::WikiLink {
                full,
                target,
                alias,
            } => {
                let link = LinkText::from_spans(text, full, target, alias);
                let resolution = resolve_link(&link, index, url_base);
                out.push_str(&render(&link, &resolution.outcome));
                resolutions.push(resolution);
            }
        }
    }

    (out, resolutions)
}

fn resolve_link(link: &LinkText<'_>, index: &PathIndex, url_base: &str) -> LinkResolution {
    let document = if link.target.is_empty() {
        None
    } else {
        index.resolve(link.target)
    };
    let outcome = match document {
        Some(document) => {
            let url = document.url(url_base);
            log::debug!("{} -> {} ({url})", link.raw, document);
            LinkOutcome::Resolved {
                document: document.clone(),
                url,
            }
        }
        None => {
            log::debug!("{} -> unresolved", link.raw);
            LinkOutcome::Unresolved
        }
    };

    LinkResolution {
        raw: link.raw.to_string(),
        target: link.target.to_string(),
        outcome,
    }
}

fn render(link: &LinkText<'_>, outcome: &LinkOutcome) -> String {
    match outcome {
        LinkOutcome::Resolved { url, .. } => format!("[{}]({url})", link.display_text()),
        LinkOutcome::Unresolved => format!("**{}**", link.target),
    }
}
