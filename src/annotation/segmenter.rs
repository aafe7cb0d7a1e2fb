/*!
 * Length-gated sentence/paragraph segmentation.
 *
 * The body is split on blank lines into paragraph candidates. Sentences
 * come from the sentence-boundary capability and are accepted only when
 * they end in terminal punctuation and their character length falls
 * strictly inside the trained bounds. One rejected sentence leaves the
 * whole paragraph unmarked.
 *
 * Content tokens are exact slices of the body, including the whitespace
 * between sentences, so detokenizing the stream and stripping the
 * markers reproduces the body verbatim.
 */

use std::sync::Arc;

use crate::annotation::context::Thresholds;
use crate::capabilities::SentenceSplitter;
use crate::document::{PARAGRAPH_CLOSE, PARAGRAPH_OPEN, SENTENCE_CLOSE, SENTENCE_OPEN};

/// Splits a body into the marker-annotated token stream.
pub struct Segmenter {
    splitter: Arc<dyn SentenceSplitter>,
}

impl Segmenter {
    /// Create a segmenter over a sentence-boundary capability.
    pub fn new(splitter: Arc<dyn SentenceSplitter>) -> Self {
        Segmenter { splitter }
    }

    /// Produce the token stream for a body. A body with no blank-line
    /// separator has zero paragraph candidates and passes through
    /// unchanged. The final split segment is a trailing artifact of the
    /// file ending with a blank line and is never a paragraph candidate,
    /// but its text is still carried through.
    pub fn segment(&self, body: &str, thresholds: &Thresholds) -> Vec<String> {
        let parts: Vec<&str> = body.split("\n\n").collect();
        if parts.len() < 2 {
            return vec![body.to_string()];
        }

        let mut tokens = Vec::new();
        let last = parts.len() - 1;
        for (i, part) in parts.iter().enumerate() {
            if i == last {
                if !part.is_empty() {
                    tokens.push((*part).to_string());
                }
            } else {
                self.segment_paragraph(part, thresholds, &mut tokens);
                tokens.push("\n\n".to_string());
            }
        }
        tokens
    }

    /// Emit one paragraph into the token stream, wrapped with markers if
    /// every sentence candidate is accepted and verbatim otherwise.
    fn segment_paragraph(&self, paragraph: &str, thresholds: &Thresholds, tokens: &mut Vec<String>) {
        if paragraph.is_empty() {
            return;
        }

        let sentences = self.splitter.split_sentences(paragraph);
        if sentences.is_empty() {
            tokens.push(paragraph.to_string());
            return;
        }

        // Recover each sentence as an exact slice, keeping the gaps.
        let mut pieces: Vec<(&str, &str)> = Vec::with_capacity(sentences.len());
        let mut cursor = 0usize;
        for sentence in &sentences {
            match paragraph[cursor..].find(sentence.as_str()) {
                Some(rel) => {
                    let start = cursor + rel;
                    let end = start + sentence.len();
                    pieces.push((&paragraph[cursor..start], &paragraph[start..end]));
                    cursor = end;
                }
                None => {
                    // Capability output is not a verbatim substring; the
                    // paragraph cannot be reassembled safely, so it stays
                    // unmarked.
                    tokens.push(paragraph.to_string());
                    return;
                }
            }
        }
        let trailing = &paragraph[cursor..];

        let all_accepted = pieces
            .iter()
            .all(|(_, sentence)| Self::accept(sentence, thresholds));
        if !all_accepted {
            tokens.push(paragraph.to_string());
            return;
        }

        tokens.push(PARAGRAPH_OPEN.to_string());
        for (gap, sentence) in &pieces {
            if !gap.is_empty() {
                tokens.push((*gap).to_string());
            }
            // Terminal punctuation is re-emitted after the closing marker.
            let punct_len = sentence
                .chars()
                .last()
                .map(char::len_utf8)
                .unwrap_or_default();
            let split_at = sentence.len() - punct_len;
            tokens.push(SENTENCE_OPEN.to_string());
            tokens.push(sentence[..split_at].to_string());
            tokens.push(SENTENCE_CLOSE.to_string());
            tokens.push(sentence[split_at..].to_string());
        }
        if !trailing.is_empty() {
            tokens.push(trailing.to_string());
        }
        tokens.push(PARAGRAPH_CLOSE.to_string());
    }

    /// A candidate is a true sentence iff it ends in `.`, `!` or `?` and
    /// its character length lies strictly between the bounds.
    fn accept(sentence: &str, thresholds: &Thresholds) -> bool {
        matches!(sentence.chars().last(), Some('.' | '!' | '?'))
            && thresholds.accepts(sentence.chars().count())
    }
}
