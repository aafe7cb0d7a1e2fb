/*!
 * Relation extraction over free-text body prose.
 *
 * A fixed, ordered list of patterns models specific announcement
 * phrasings. The speaker patterns and the bare time/location patterns
 * are tried unconditionally and independently; the venue patterns form
 * an ordered fallback chain where the first match wins.
 */

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::annotation::context::RunContext;
use crate::capabilities::{LexicalClass, LexicalLookup, NameLists};
use crate::document::{Candidate, CandidateSet, TagKind};

// "<subject> [from <affiliation>] will present/speak/... on/about <topic>."
static SPEAKER_WITH_TOPIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)((?:\w+\s)?\w+)(?:\s+from\s+(?:(?:the\s+)?university\s+of\s+\w+|\w+\s+university))?\s+(?:will|is\s+going\s+to)\s+(?:present|speak|talk|lecture|deliver\s+a\s+(?:guest\s+)?(?:lecture|talk|presentation))\s+(?:on\s+the\s+topic|in|about|on)\s+.*\.",
    )
    .unwrap()
});

// Same phrasing without the trailing topic clause.
static SPEAKER_BARE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)((?:\w+\s)?\w+)(?:\s+from\s+(?:(?:the\s+)?university\s+of\s+\w+|\w+\s+university))?\s+(?:will|is\s+going\s+to)\s+(?:present|speak|talk|lecture|deliver\s+a\s+(?:guest\s+)?(?:lecture|talk|presentation))",
    )
    .unwrap()
});

// "The seminar will be held in <location> at <time> on <date>"
static VENUE_TIME_THEN_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\bthe\s+(?:seminar|lecture|talk|presentation)\s+(?:will|is\s+going\s+to)\s+(?:be\s+(?:held\s+)?in|hosted\s+in)\s+(?P<loc>.+)\s+at\s+(?P<time>.+)\s+on\s+[^!.]*",
    )
    .unwrap()
});

// "The seminar will be held in <location> on <date> at <time>"
static VENUE_DATE_THEN_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\bthe\s+(?:seminar|lecture|talk|presentation)\s+(?:will|is\s+going\s+to)\s+(?:be\s+(?:held\s+)?in|hosted\s+in)\s+(?P<loc>.+)\s+on\s+.+\s+at\s+(?P<time>[^!.]*)",
    )
    .unwrap()
});

// "The seminar will be held in <location>." with no explicit time
static VENUE_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\bthe\s+(?:seminar|lecture|talk|presentation)\s+(?:will|is\s+going\s+to)\s+(?:be\s+(?:held\s+)?in|hosted\s+in)\s+(?P<loc>.+)\.",
    )
    .unwrap()
});

// "seminar ... will be ... at <time>"
static EVENT_AT_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:seminar|talk|presentation).*(?:are|will\s+be|is\s+going\s+to\s+be).*\bat\s+(?P<time>\d+(?:\D\d+)?(?:\s?(?:pm|am))?)",
    )
    .unwrap()
});

// "seminar ... will be ... in <location>"
static EVENT_IN_LOCATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:seminar|talk|presentation).*(?:are|will\s+be|is\s+going\s+to\s+be).*\bin\s+(?P<loc>\w+(?:\s+\d+)?)",
    )
    .unwrap()
});

/// Relation extractor over body prose.
pub struct RelationExtractor;

impl RelationExtractor {
    /// Try every pattern against the body, inserting candidates into the
    /// set and merging discovered locations into the gazetteer.
    pub async fn extract(
        body: &str,
        candidates: &mut CandidateSet,
        ctx: &RunContext,
        lookup: &dyn LexicalLookup,
        names: &NameLists,
    ) {
        for pattern in [&*SPEAKER_WITH_TOPIC, &*SPEAKER_BARE] {
            if let Some(cap) = pattern.captures(body) {
                let subject = cap[1].trim();
                if Self::accept_speaker(subject, lookup, names).await {
                    candidates.insert(Candidate::new(subject, TagKind::Speaker));
                }
            }
        }

        // Venue chain: the first pattern to match wins; later ones are
        // not consulted.
        for pattern in [&*VENUE_TIME_THEN_DATE, &*VENUE_DATE_THEN_TIME, &*VENUE_ONLY] {
            let Some(cap) = pattern.captures(body) else {
                continue;
            };
            if let Some(loc) = cap.name("loc") {
                let loc = loc.as_str().trim();
                if !loc.is_empty() {
                    candidates.insert(Candidate::new(loc, TagKind::Location));
                    ctx.add_location(loc);
                }
            }
            if let Some(time) = cap.name("time") {
                let time = time.as_str().trim();
                if !time.is_empty() {
                    candidates.insert(Candidate::new(time, TagKind::Stime));
                }
            }
            break;
        }

        if let Some(cap) = EVENT_AT_TIME.captures(body) {
            let time = cap["time"].trim();
            if !time.is_empty() {
                candidates.insert(Candidate::new(time, TagKind::Stime));
            }
        }

        if let Some(cap) = EVENT_IN_LOCATION.captures(body) {
            let loc = cap["loc"].trim();
            if !loc.is_empty() {
                candidates.insert(Candidate::new(loc, TagKind::Location));
                ctx.add_location(loc);
            }
        }
    }

    /// Accept a candidate noun phrase as a speaker. Name-list membership
    /// or a "person" signal accepts; a place/organization signal rejects;
    /// no signal or a failed lookup falls open to "person".
    async fn accept_speaker(term: &str, lookup: &dyn LexicalLookup, names: &NameLists) -> bool {
        if term.is_empty() {
            return false;
        }
        if names.contains_any_name(term) {
            return true;
        }
        match lookup.classify_term(term).await {
            Ok(Some(LexicalClass::Person)) => true,
            Ok(Some(LexicalClass::Place)) => {
                debug!("discarding speaker candidate {:?}: classified as a place", term);
                false
            }
            Ok(None) => true,
            Err(e) => {
                warn!("lexical lookup failed for {:?}, defaulting to person: {}", term, e);
                true
            }
        }
    }
}
