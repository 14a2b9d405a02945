use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// `%%hidden%%` comments. Non-greedy and never crossing a line break.
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%%.*?%%").expect("comment pattern compiles"));

pub fn strip_comments(text: &str) -> Cow<'_, str> {
    COMMENT.replace_all(text, "")
}
