//! Tiny inline markup used in answers: `**bold**`, `` `code` `` and newlines.

use once_cell::sync::Lazy;
use regex::Regex;

static INLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*(?P<bold>.+?)\*\*|`(?P<code>.+?)`").expect("static markup regex")
});

/// One run of styled answer text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupSpan {
    Text(String),
    Bold(String),
    Code(String),
    LineBreak,
}

/// Split `source` into spans. Unmatched markers are kept as literal text.
pub fn parse_markup(source: &str) -> Vec<MarkupSpan> {
    let mut spans = Vec::new();
    for (line_idx, line) in source.split('\n').enumerate() {
        if line_idx > 0 {
            spans.push(MarkupSpan::LineBreak);
        }
        parse_line(line, &mut spans);
    }
    spans
}

/// Markup stripped down to plain text, one line per source line.
pub fn plain_text(source: &str) -> String {
    parse_markup(source)
        .into_iter()
        .map(|span| match span {
            MarkupSpan::Text(text) | MarkupSpan::Bold(text) | MarkupSpan::Code(text) => text,
            MarkupSpan::LineBreak => "\n".to_string(),
        })
        .collect()
}

fn parse_line(line: &str, spans: &mut Vec<MarkupSpan>) {
    let mut cursor = 0;
    for caps in INLINE.captures_iter(line) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > cursor {
            spans.push(MarkupSpan::Text(line[cursor..whole.start()].to_string()));
        }
        if let Some(bold) = caps.name("bold") {
            spans.push(MarkupSpan::Bold(bold.as_str().to_string()));
        } else if let Some(code) = caps.name("code") {
            spans.push(MarkupSpan::Code(code.as_str().to_string()));
        }
        cursor = whole.end();
    }
    if cursor < line.len() {
        spans.push(MarkupSpan::Text(line[cursor..].to_string()));
    }
}
