//! Span masking over byte ranges.

use std::ops::Range;

/// Sort and coalesce overlapping or touching spans.
pub(crate) fn merge_spans(mut spans: Vec<Range<usize>>) -> Vec<Range<usize>> {
    spans.sort_by_key(|span| (span.start, span.end));
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }
    merged
}

/// Replace every non-whitespace character inside `spans` with `replacement`.
///
/// Spans are byte ranges on char boundaries of `text`. Whitespace inside a
/// span survives so that masked phrases keep their word structure.
pub(crate) fn mask_spans(text: &str, spans: Vec<Range<usize>>, replacement: char) -> String {
    let spans = merge_spans(spans);
    if spans.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut spans = spans.into_iter().peekable();
    for (idx, ch) in text.char_indices() {
        while spans.peek().is_some_and(|span| span.end <= idx) {
            spans.next();
        }
        let inside = spans.peek().is_some_and(|span| span.start <= idx);
        if inside && !ch.is_whitespace() {
            out.push(replacement);
        } else {
            out.push(ch);
        }
    }
    out
}
