use std::borrow::Cow;

pub const NOTE_MARKER: &str = "[!NOTE]";
pub const NOTE_GLYPH: &str = "📝";

/// Only the note callout is expanded; `[!WARNING]` and friends pass through.
pub fn expand_callouts(text: &str) -> Cow<'_, str> {
    if text.contains(NOTE_MARKER) {
        Cow::Owned(text.replace(NOTE_MARKER, NOTE_GLYPH))
    } else {
        Cow::Borrowed(text)
    }
}
