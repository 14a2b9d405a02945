use crate::parsing::span::Span;

use super::{cursor::Cursor, kinds::WikiLink, types::InlineNode};

/// Parses document text into a sequence of [`InlineNode`]s.
///
/// Every byte of `s` is covered by exactly one node, in order. Text between
/// wiki links is emitted as `InlineNode::Text`.
///
/// A link never spans a line break, and `[[` without a matching `]]` on the
/// same line is plain text.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if let Some(node) = try_parse_wikilink(&mut cur) {
            let full = node.full_span();
            flush_text(&mut out, text_start, full.start);
            text_start = full.end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to parse a wikilink starting at the current position.
///
/// Handles `[[target]]`, `[[target|alias]]` and the `[[target]]]` variant.
/// The target may be empty (`[[]]`); such links never resolve.
/// Returns `None` when not at `[[` or when the link isn't closed on the same
/// line. On failure the cursor is restored.
fn try_parse_wikilink(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(WikiLink::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(WikiLink::OPEN.len());
    let target_start = cur.pos();

    while !cur.at_line_end()
        && cur.peek() != Some(WikiLink::ALIAS)
        && !cur.starts_with(WikiLink::CLOSE)
    {
        cur.bump();
    }
    let target_end = cur.pos();

    let mut alias = None;
    if cur.peek() == Some(WikiLink::ALIAS) {
        cur.bump(); // |
        let alias_start = cur.pos();
        while !cur.at_line_end() && !cur.starts_with(WikiLink::CLOSE) {
            cur.bump();
        }
        alias = Some(Span {
            start: alias_start,
            end: cur.pos(),
        });
    }

    if !cur.starts_with(WikiLink::CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump_n(WikiLink::CLOSE.len());
    if cur.peek() == Some(WikiLink::STRAY_CLOSE) {
        cur.bump();
    }

    Some(InlineNode::WikiLink {
        full: Span {
            start,
            end: cur.pos(),
        },
        target: Span {
            start: target_start,
            end: target_end,
        },
        alias,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_text() {
        let nodes = parse_inline("hello world");
        assert_eq!(nodes, vec![InlineNode::Text(Span::new(0, 11))]);
    }

    #[test]
    fn parse_empty_input() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn parse_wikilink_simple() {
        let nodes = parse_inline("[[target]]");
        assert_eq!(
            nodes,
            vec![InlineNode::WikiLink {
                full: Span::new(0, 10),
                target: Span::new(2, 8),
                alias: None,
            }]
        );
    }

    #[test]
    fn parse_wikilink_with_alias() {
        let nodes = parse_inline("[[target|alias]]");
        assert_eq!(
            nodes,
            vec![InlineNode::WikiLink {
                full: Span::new(0, 16),
                target: Span::new(2, 8),
                alias: Some(Span::new(9, 14)),
            }]
        );
    }

    #[test]
    fn alias_splits_on_first_pipe_only() {
        let src = "[[a|b|c]]";
        let nodes = parse_inline(src);
        match &nodes[0] {
            InlineNode::WikiLink { target, alias, .. } => {
                assert_eq!(target.slice(src), "a");
                assert_eq!(alias.map(|a| a.slice(src)), Some("b|c"));
            }
            other => panic!("expected WikiLink, got {other:?}"),
        }
    }

    #[test]
    fn stray_third_bracket_is_consumed() {
        let nodes = parse_inline("[[Page]]] after");
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].full_span(), Span::new(0, 9));
        assert_eq!(nodes[1], InlineNode::Text(Span::new(9, 15)));
    }

    #[test]
    fn links_are_non_greedy() {
        let src = "[[One]] and [[Two]]";
        let targets: Vec<&str> = parse_inline(src)
            .iter()
            .filter_map(|n| match n {
                InlineNode::WikiLink { target, .. } => Some(target.slice(src)),
                InlineNode::Text(_) => None,
            })
            .collect();
        assert_eq!(targets, vec!["One", "Two"]);
    }

    #[test]
    fn text_around_links_is_preserved() {
        let src = "See [[Plan]] now";
        let nodes = parse_inline(src);
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0], InlineNode::Text(Span::new(0, 4)));
        assert_eq!(nodes[2], InlineNode::Text(Span::new(12, 16)));
    }

    #[test]
    fn unclosed_wikilink_becomes_text() {
        let nodes = parse_inline("[[unclosed link");
        assert_eq!(nodes, vec![InlineNode::Text(Span::new(0, 15))]);
    }

    #[test]
    fn link_does_not_span_lines() {
        let nodes = parse_inline("[[broken\nlink]]");
        assert_eq!(nodes, vec![InlineNode::Text(Span::new(0, 15))]);
    }

    #[test]
    fn empty_target_is_still_a_link() {
        let src = "[[]] and [[|alias]]";
        let nodes = parse_inline(src);
        assert_eq!(
            nodes,
            vec![
                InlineNode::WikiLink {
                    full: Span::new(0, 4),
                    target: Span::new(2, 2),
                    alias: None,
                },
                InlineNode::Text(Span::new(4, 9)),
                InlineNode::WikiLink {
                    full: Span::new(9, 19),
                    target: Span::new(11, 11),
                    alias: Some(Span::new(12, 17)),
                },
            ]
        );
    }

    #[test]
    fn multibyte_text_keeps_char_boundaries() {
        let src = "café [[Überblick]] ✓";
        let nodes = parse_inline(src);
        assert_eq!(nodes.len(), 3);
        match &nodes[1] {
            InlineNode::WikiLink { target, .. } => assert_eq!(target.slice(src), "Überblick"),
            other => panic!("expected WikiLink, got {other:?}"),
        }
    }
}
