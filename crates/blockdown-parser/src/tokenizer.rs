//! Inline tokenizer for styled text runs.
//!
//! This module splits a single line of text into [`StyledRun`]s, resolving
//! `**bold**`, `_italic_`, `__underline__`, `~~strikethrough~~` and
//! `` `code` `` via nearest-closing-delimiter matching.

use blockdown_core::{Style, StyledRun};

/// Style markers in dispatch order. First match at the cursor wins, so a
/// lone `_` with any later `_` closes as italic before `__` is considered.
const MARKERS: [(&str, Style); 5] = [
    ("**", Style::Bold),
    ("_", Style::Italic),
    ("__", Style::Underline),
    ("~~", Style::Strikethrough),
    ("`", Style::Code),
];

/// Split one line of text into styled runs.
///
/// A marker only opens a span when the same marker occurs again later in
/// the line; an opener with no closer falls through as plain text. Styles
/// do not nest, so each emitted run carries at most one style flag.
///
/// A non-empty line produces at least one run; an empty line produces a
/// single empty plain run.
///
/// # Example
///
/// ```
/// use blockdown_parser::tokenize;
///
/// let runs = tokenize("**bold** rest");
/// assert_eq!(runs.len(), 2);
/// assert!(runs[0].bold);
/// assert_eq!(runs[0].text, "bold");
/// assert_eq!(runs[1].text, " rest");
/// ```
pub fn tokenize(line: &str) -> Vec<StyledRun> {
    let mut runs = Vec::new();
    let mut pending = String::new();
    let mut cursor = 0;

    'scan: while cursor < line.len() {
        let rest = &line[cursor..];

        for (marker, style) in MARKERS {
            if let Some(body) = rest.strip_prefix(marker) {
                if let Some(close) = body.find(marker) {
                    if !pending.is_empty() {
                        runs.push(StyledRun::plain(std::mem::take(&mut pending)));
                    }
                    runs.push(StyledRun::styled(&body[..close], style));
                    cursor += marker.len() * 2 + close;
                    continue 'scan;
                }
            }
        }

        let Some(ch) = rest.chars().next() else { break };
        pending.push(ch);
        cursor += ch.len_utf8();
    }

    if !pending.is_empty() || runs.is_empty() {
        runs.push(StyledRun::plain(pending));
    }

    runs
}
