/*!
 * Entity fallbacks, invoked only when header and relation extraction
 * came up empty for the corresponding tag kind.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::annotation::context::RunContext;
use crate::capabilities::{EntityClass, EntityTagger, NameLists};
use crate::document::{is_all_punctuation, tokenize, Candidate, CandidateSet, TagKind};

// A word immediately followed by a period, e.g. an initial.
static SHORTENED_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+\.$").unwrap());

/// Name fallback: collect contiguous name runs from entity-tagged tokens
/// and tag the first line that matches one.
pub struct NameFallback;

impl NameFallback {
    /// Build name runs and insert at most one speaker candidate: the
    /// first line whose trimmed content exactly equals a collected run.
    pub fn extract(
        text: &str,
        candidates: &mut CandidateSet,
        tagger: &dyn EntityTagger,
        names: &NameLists,
    ) {
        let tokens = tokenize(text);
        let classified = tagger.tag_entities(&tokens);

        let mut runs: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut open = false;
        for (word, class) in &classified {
            let is_punct = is_all_punctuation(word);
            let extends = *class == EntityClass::Person
                || names.is_name(word)
                || names.is_title(word)
                || SHORTENED_NAME.is_match(word)
                || (is_punct && open);
            if extends {
                if open && !is_punct {
                    current.push(' ');
                }
                current.push_str(word);
                open = true;
            } else if open {
                runs.push(std::mem::take(&mut current));
                open = false;
            }
        }
        if open {
            runs.push(current);
        }
        debug!("name fallback collected {} run(s)", runs.len());

        for line in text.lines() {
            let trimmed = line.trim();
            if !trimmed.is_empty() && runs.iter().any(|run| run == trimmed) {
                candidates.insert(Candidate::new(trimmed, TagKind::Speaker));
                break;
            }
        }
    }
}

/// Location fallback: case-insensitive gazetteer sweep over the text.
pub struct LocationFallback;

impl LocationFallback {
    /// Every gazetteer entry found as a substring becomes a location
    /// candidate carrying the document's original casing of the span.
    pub fn extract(text: &str, candidates: &mut CandidateSet, ctx: &RunContext) {
        let lowered = text.to_lowercase();
        // Lowercasing can change byte lengths for non-ASCII text, in
        // which case offsets into the original are unreliable.
        let offsets_valid = lowered.len() == text.len();

        for entry in ctx.known_locations() {
            let needle = entry.to_lowercase();
            if needle.is_empty() {
                continue;
            }
            if !offsets_valid {
                if lowered.contains(&needle) {
                    candidates.insert(Candidate::new(entry.clone(), TagKind::Location));
                }
                continue;
            }
            let mut from = 0usize;
            while let Some(rel) = lowered[from..].find(&needle) {
                let start = from + rel;
                let end = start + needle.len();
                if let Some(span) = text.get(start..end) {
                    candidates.insert(Candidate::new(span, TagKind::Location));
                }
                from = end;
            }
        }
    }
}
