//! Inline scanning of bold, italic and code spans.
//!
//! A single alternation is matched left to right; earlier alternatives win at the
//! same position. Emphasis does not nest and `*x*` is not treated as italic.

use once_cell::sync::Lazy;
use regex::{CaptureMatches, Captures, Regex};

use crate::block::Span;

static INLINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*([^*]+)\*\*|__([^_]+)__|_([^_]+)_|`([^`]+)`")
        .expect("inline pattern is valid")
});

/// Lazily yields the spans of `text` in source order.
pub struct Inline<'a> {
    text: &'a str,
    matches: CaptureMatches<'static, 'a>,
    pos: usize,
    pending: Option<Span>,
}

/// Scan `text` into inline spans.
pub fn scan(text: &str) -> Inline<'_> {
    Inline {
        text,
        matches: INLINE_RE.captures_iter(text),
        pos: 0,
        pending: None,
    }
}

/// Collected form of [`scan`].
pub fn spans(text: &str) -> Vec<Span> {
    scan(text).collect()
}

impl Iterator for Inline<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        if let Some(span) = self.pending.take() {
            return Some(span);
        }

        if self.pos >= self.text.len() {
            return None;
        }

        let Some(caps) = self.matches.next() else {
            let rest = &self.text[self.pos..];
            self.pos = self.text.len();
            return Some(Span::Text(rest.to_string()));
        };

        let whole = caps.get(0)?;
        let span = classify(&caps);
        let before = &self.text[self.pos..whole.start()];
        self.pos = whole.end();

        if before.is_empty() {
            Some(span)
        } else {
            self.pending = Some(span);
            Some(Span::Text(before.to_string()))
        }
    }
}

fn classify(caps: &Captures<'_>) -> Span {
    if let Some(m) = caps.get(1).or_else(|| caps.get(2)) {
        Span::Bold(m.as_str().to_string())
    } else if let Some(m) = caps.get(3) {
        Span::Italic(m.as_str().to_string())
    } else {
        // Only the code group is left
        let code = caps.get(4).map_or("", |m| m.as_str());
        Span::Code(code.to_string())
    }
}
