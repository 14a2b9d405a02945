use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Default location of the client-side mermaid renderer.
pub const MERMAID_SCRIPT_SRC: &str = "https://cdn.jsdelivr.net/npm/mermaid/dist/mermaid.min.js";

static MERMAID_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```mermaid(?P<body>.*?)```").expect("mermaid pattern compiles")
});

/// Replace each fenced mermaid block with a script tag and a
/// `<div class=mermaid>` holding the diagram source verbatim.
pub fn replace_mermaid_blocks<'t>(text: &'t str, script_src: &str) -> Cow<'t, str> {
    MERMAID_BLOCK.replace_all(text, |caps: &Captures| {
        format!(
            "<script src='{script_src}'></script><div class=mermaid>{}</div>",
            &caps["body"]
        )
    })
}
