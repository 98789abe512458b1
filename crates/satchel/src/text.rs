//! Emoji-code lookup and string trimming.

use std::collections::HashMap;

/// Looks up `:code:` in a caller-supplied emoji map. Returns an empty
/// string when the code is not present.
pub fn emoji_glyph(code: &str, emoji_map: &HashMap<String, String>) -> String {
    emoji_map
        .get(&format!(":{code}:"))
        .cloned()
        .unwrap_or_default()
}

/// Truncates `s` at the first occurrence of `marker`. The input is returned
/// untouched when the marker is absent.
pub fn trim_after<'a>(s: &'a str, marker: &str) -> &'a str {
    match s.find(marker) {
        Some(idx) => &s[..idx],
        None => s,
    }
}
