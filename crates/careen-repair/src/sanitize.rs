//! Oracle output normalization.
//!
//! Generated text reliably arrives with markdown fences, typographic
//! glyphs, and conversational framing, none of which survive parsing.
//! [`sanitize_reply`] runs before every re-validation; [`extract_solution`]
//! runs once per session, on the first oracle output only.

/// Normalize oracle text into parseable ASCII source: translate comparison
/// and arrow glyphs, drop fence delimiter lines, drop every remaining
/// non-ASCII character.
pub fn sanitize_reply(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        if line.trim_start().starts_with("```") {
            continue;
        }
        for ch in line.chars() {
            match ch {
                '≤' => out.push_str("<="),
                '≥' => out.push_str(">="),
                '≠' => out.push_str("!="),
                '→' => out.push_str("->"),
                '←' => out.push_str("<-"),
                c if c.is_ascii() => out.push(c),
                _ => {}
            }
        }
        out.push('\n');
    }
    out
}

/// Separate an embedded code payload from conversational prose.
///
/// Strips emphasis markup, then searches case-insensitively for the word
/// `solution` followed by a colon; everything after the marker is the code.
/// Without the marker the raw output is returned unchanged.
pub fn extract_solution(raw: &str) -> String {
    let stripped = raw.replace("**", "").replace("__", "");
    let lower = stripped.to_ascii_lowercase();

    let mut search = 0;
    while let Some(found) = lower[search..].find("solution") {
        let start = search + found;
        let after = start + "solution".len();
        let rest = stripped[after..].trim_start();
        if let Some(body) = rest.strip_prefix(':') {
            return body.trim_start().to_string();
        }
        search = after;
    }

    raw.to_string()
}
