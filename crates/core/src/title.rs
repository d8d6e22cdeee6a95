//! Title resolution for the FAQ card.
//!
//! The query value arrives percent-encoded and untrusted. Decoding is done by
//! hand so a malformed value falls back to its raw text instead of rejecting
//! the request.

use percent_encoding::percent_decode_str;

/// Title shown when the query omits one or supplies only whitespace.
pub const DEFAULT_TITLE: &str = "Frequently Asked Questions";

/// Titles longer than this many characters are cut and marked with an ellipsis.
pub const MAX_TITLE_CHARS: usize = 60;

/// Return the raw (still percent-encoded) value for `key` in a query string.
/// A key present without `=` yields an empty value.
pub fn raw_query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        (k == key).then_some(v)
    })
}

/// Resolve the display title from the raw query value.
///
/// `+` counts as a space per form encoding. A value whose decoded bytes are
/// not valid UTF-8 falls back to the raw text; invalid percent sequences pass
/// through verbatim. The result is trimmed, defaulted when empty, and cut to
/// [`MAX_TITLE_CHARS`] characters with `...` appended.
pub fn display_title(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return DEFAULT_TITLE.to_string();
    };
    let candidate = raw.replace('+', " ");
    let decoded = match percent_decode_str(&candidate).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => candidate,
    };
    let trimmed = decoded.trim();
    if trimmed.is_empty() {
        return DEFAULT_TITLE.to_string();
    }
    truncate(trimmed)
}

fn truncate(title: &str) -> String {
    match title.char_indices().nth(MAX_TITLE_CHARS) {
        Some((idx, _)) => format!("{}...", &title[..idx]),
        None => title.to_string(),
    }
}
