/*!
 * Tag insertion and token-stream reconstruction.
 *
 * The tag inserter wraps candidate spans with delimiter pairs without
 * ever rewriting span content. Match offsets are computed against the
 * unmodified input in one pass and emitted into a single rewritten
 * buffer, so an earlier insertion can never create a phantom match for a
 * later candidate; overlapping matches are resolved in candidate-set
 * order. Distinct tag kinds may still cross each other's boundaries in
 * adversarial inputs; that is accepted.
 */

use crate::document::{
    CandidateSet, PARAGRAPH_CLOSE, PARAGRAPH_OPEN, SENTENCE_CLOSE, SENTENCE_OPEN,
};

/// Reassemble a token stream into a single string. The segmenter emits
/// content tokens as exact slices of the original body, so reassembly is
/// plain concatenation and stripping the markers recovers the body.
pub fn detokenize(tokens: &[String]) -> String {
    tokens.concat()
}

struct SpanMatch {
    start: usize,
    end: usize,
    label: &'static str,
    span: String,
}

/// Wraps candidate spans with delimiters in target text.
pub struct TagInserter;

impl TagInserter {
    /// Wrap every non-overlapping literal occurrence of each candidate
    /// span with ` <kind>span </kind>`. Start/end-time spans lose one
    /// trailing period first; a full stop never belongs to a time.
    pub fn insert(text: &str, candidates: &CandidateSet) -> String {
        let mut matches: Vec<SpanMatch> = Vec::new();
        for candidate in candidates {
            let mut span = candidate.text.as_str();
            if candidate.kind.is_time() {
                span = span.strip_suffix('.').unwrap_or(span);
            }
            if span.is_empty() {
                continue;
            }
            for (start, found) in text.match_indices(span) {
                let end = start + found.len();
                let overlaps = matches
                    .iter()
                    .any(|m| start < m.end && m.start < end);
                if !overlaps {
                    matches.push(SpanMatch {
                        start,
                        end,
                        label: candidate.kind.label(),
                        span: span.to_string(),
                    });
                }
            }
        }
        matches.sort_by_key(|m| m.start);

        let mut out = String::with_capacity(text.len() + matches.len() * 24);
        let mut cursor = 0usize;
        for m in matches {
            out.push_str(&text[cursor..m.start]);
            out.push_str(&format!(" <{}>{} </{}>", m.label, m.span, m.label));
            cursor = m.end;
        }
        out.push_str(&text[cursor..]);
        out
    }

    /// Tag a header line by line with the same candidate set,
    /// newline-joined.
    pub fn insert_lines(header: &str, candidates: &CandidateSet) -> String {
        header
            .lines()
            .map(|line| Self::insert(line, candidates))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Item<'a> {
    Text(&'a str),
    SentenceOpen,
    SentenceClose,
    ParagraphOpen,
    ParagraphClose,
}

/// Reassembles the marker-annotated stream into final prose.
pub struct Reconstructor;

impl Reconstructor {
    /// Walk the tagged text marker by marker. A `<sentence>` directly
    /// after terminal punctuation gains a leading space; one arriving
    /// with no paragraph open gets a synthetic `<paragraph>` ahead of it.
    /// A `</sentence>` not followed by another sentence or an existing
    /// paragraph close is followed by `</paragraph>` and a blank line
    /// once its trailing punctuation has been emitted.
    pub fn reconstruct(tagged: &str) -> String {
        let items = Self::scan(tagged);
        let mut out = String::with_capacity(tagged.len() + 16);
        let mut paragraph_open = false;
        let mut close_after_text = false;

        for (idx, item) in items.iter().enumerate() {
            match item {
                Item::Text(text) => {
                    out.push_str(text);
                    if close_after_text {
                        out.push_str(PARAGRAPH_CLOSE);
                        out.push_str("\n\n");
                        close_after_text = false;
                    }
                }
                Item::ParagraphOpen => {
                    out.push_str(PARAGRAPH_OPEN);
                    paragraph_open = true;
                }
                Item::ParagraphClose => {
                    out.push_str(PARAGRAPH_CLOSE);
                    paragraph_open = false;
                }
                Item::SentenceOpen => {
                    if matches!(out.chars().last(), Some('.' | '!' | '?')) {
                        out.push(' ');
                    } else if !paragraph_open {
                        // Sentence marker whose paragraph boundary was
                        // not established upstream.
                        out.push_str(PARAGRAPH_OPEN);
                        paragraph_open = true;
                    }
                    out.push_str(SENTENCE_OPEN);
                }
                Item::SentenceClose => {
                    out.push_str(SENTENCE_CLOSE);
                    match Self::next_marker(&items[idx + 1..]) {
                        Some(Item::SentenceOpen) | Some(Item::ParagraphClose) => {}
                        _ => {
                            close_after_text = true;
                            paragraph_open = false;
                        }
                    }
                }
            }
        }
        if close_after_text {
            out.push_str(PARAGRAPH_CLOSE);
            out.push_str("\n\n");
        }
        out
    }

    /// First structural marker following the current position.
    fn next_marker<'a>(rest: &[Item<'a>]) -> Option<Item<'a>> {
        rest.iter()
            .find(|item| !matches!(item, Item::Text(_)))
            .copied()
    }

    /// Split tagged text into text runs and structural-marker atoms.
    fn scan(text: &str) -> Vec<Item<'_>> {
        const MARKERS: [&str; 4] = [PARAGRAPH_OPEN, PARAGRAPH_CLOSE, SENTENCE_OPEN, SENTENCE_CLOSE];

        let mut items = Vec::new();
        let mut pos = 0usize;
        while pos < text.len() {
            let mut next: Option<(usize, usize, Item)> = None;
            for (i, marker) in MARKERS.iter().enumerate() {
                if let Some(rel) = text[pos..].find(marker) {
                    let start = pos + rel;
                    if next.is_none_or(|(s, _, _)| start < s) {
                        let item = match i {
                            0 => Item::ParagraphOpen,
                            1 => Item::ParagraphClose,
                            2 => Item::SentenceOpen,
                            _ => Item::SentenceClose,
                        };
                        next = Some((start, marker.len(), item));
                    }
                }
            }
            match next {
                Some((start, len, item)) => {
                    if start > pos {
                        items.push(Item::Text(&text[pos..start]));
                    }
                    items.push(item);
                    pos = start + len;
                }
                None => {
                    items.push(Item::Text(&text[pos..]));
                    pos = text.len();
                }
            }
        }
        items
    }
}
