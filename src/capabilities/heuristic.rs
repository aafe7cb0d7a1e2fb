/*!
 * Built-in heuristic capability implementations.
 *
 * These keep the pipeline fully usable without any external service: a
 * rule-based sentence splitter, a name-list entity tagger, and a lookup
 * that never produces a signal (deferring to the fail-open default).
 */

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::capabilities::{EntityClass, EntityTagger, LexicalClass, LexicalLookup, NameLists, SentenceSplitter};
use crate::errors::CapabilityError;

// Words a trailing period does not terminate a sentence after.
static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["dr", "mr", "mrs", "ms", "prof", "st", "vs", "etc"]
        .into_iter()
        .collect()
});

/// Rule-based sentence splitter: a sentence ends at `.`, `!` or `?`
/// followed by whitespace or end of text, except after a known
/// abbreviation. Returned sentences are trimmed substrings of the input,
/// in order.
#[derive(Debug, Default)]
pub struct RuleSentenceSplitter;

impl RuleSentenceSplitter {
    fn is_abbreviation(paragraph: &str, period_idx: usize) -> bool {
        let head = &paragraph[..period_idx];
        let word = head
            .rsplit(|c: char| c.is_whitespace())
            .next()
            .unwrap_or("");
        ABBREVIATIONS.contains(word.to_lowercase().as_str())
    }
}

impl SentenceSplitter for RuleSentenceSplitter {
    fn split_sentences(&self, paragraph: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0usize;
        let mut iter = paragraph.char_indices().peekable();
        while let Some((idx, ch)) = iter.next() {
            let terminal = matches!(ch, '.' | '!' | '?');
            if !terminal {
                continue;
            }
            if ch == '.' && Self::is_abbreviation(paragraph, idx) {
                continue;
            }
            let at_boundary = match iter.peek() {
                Some((_, next)) => next.is_whitespace(),
                None => true,
            };
            if at_boundary {
                let end = idx + ch.len_utf8();
                let sentence = paragraph[start..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                start = end;
            }
        }
        let rest = paragraph[start..].trim();
        if !rest.is_empty() {
            sentences.push(rest.to_string());
        }
        sentences
    }
}

/// Name-list backed entity tagger: a token is PERSON when it appears in
/// the given/family-name reference list, OTHER otherwise.
#[derive(Debug)]
pub struct NameListEntityTagger {
    names: Arc<NameLists>,
}

impl NameListEntityTagger {
    /// Create a tagger over the given reference lists.
    pub fn new(names: Arc<NameLists>) -> Self {
        NameListEntityTagger { names }
    }
}

impl EntityTagger for NameListEntityTagger {
    fn tag_entities(&self, tokens: &[String]) -> Vec<(String, EntityClass)> {
        tokens
            .iter()
            .map(|token| {
                let class = if self.names.is_name(token) {
                    EntityClass::Person
                } else {
                    EntityClass::Other
                };
                (token.clone(), class)
            })
            .collect()
    }
}

/// Lexical lookup that never finds a usable signal. Callers treat the
/// absence of a signal as "person".
#[derive(Debug, Default)]
pub struct NoSignalLookup;

#[async_trait]
impl LexicalLookup for NoSignalLookup {
    async fn classify_term(&self, _term: &str) -> Result<Option<LexicalClass>, CapabilityError> {
        Ok(None)
    }
}
