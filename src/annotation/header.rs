/*!
 * Pattern rules over structured header lines.
 *
 * Announcements usually carry `Time:`, `Place:`/`Location:` and
 * `Who:`/`Speaker:` lines; many embed a second header inside the body,
 * so the extractor is also run over body text unchanged.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::annotation::context::RunContext;
use crate::document::{Candidate, CandidateSet, TagKind};

static TIME_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Times?:[ \t]*([^\n]*)").unwrap());

static PLACE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:Places?|Locations?):[ \t]*([^\n]*)").unwrap());

static SPEAKER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:Who|Speakers?):[ \t]*([^,\n]*)").unwrap());

// A time value is a range when split by a separator word or character.
static TIME_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(.*?)\s*(?:-|,|;|until|up\s+to)\s*(.*)$").unwrap());

/// Header extractor over structured announcement lines.
pub struct HeaderExtractor;

impl HeaderExtractor {
    /// Apply every header rule to the text, inserting candidates and
    /// feeding discovered places into the gazetteer.
    pub fn extract(text: &str, candidates: &mut CandidateSet, ctx: &RunContext) {
        if let Some(cap) = TIME_LINE.captures(text) {
            Self::extract_times(cap[1].trim(), candidates);
        }

        if let Some(cap) = PLACE_LINE.captures(text) {
            let place = cap[1].trim();
            if !place.is_empty() {
                candidates.insert(Candidate::new(place, TagKind::Location));
                ctx.add_location(place);
            }
        }

        if let Some(cap) = SPEAKER_LINE.captures(text) {
            let speaker = Self::clean_speaker(&cap[1]);
            if !speaker.is_empty() {
                candidates.insert(Candidate::new(speaker, TagKind::Speaker));
            }
        }
    }

    /// Split a raw time value into start/end candidates. Without a
    /// separator the whole value becomes the start time.
    fn extract_times(raw: &str, candidates: &mut CandidateSet) {
        if raw.is_empty() {
            return;
        }
        match TIME_RANGE.captures(raw) {
            Some(range) => {
                let start = range[1].trim();
                let end = range[2].trim();
                if !start.is_empty() {
                    candidates.insert(Candidate::new(start, TagKind::Stime));
                }
                if !end.is_empty() {
                    candidates.insert(Candidate::new(end, TagKind::Etime));
                }
            }
            None => {
                candidates.insert(Candidate::new(raw, TagKind::Stime));
            }
        }
    }

    /// Trim a speaker value and drop one trailing punctuation character.
    fn clean_speaker(raw: &str) -> String {
        let mut name = raw.trim().to_string();
        if name
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_punctuation())
        {
            name.pop();
            name = name.trim_end().to_string();
        }
        name
    }
}
