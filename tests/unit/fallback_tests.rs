/*!
 * Tests for the name and location fallbacks
 */

use semtag::annotation::fallback::{LocationFallback, NameFallback};
use semtag::capabilities::mock::ScriptedEntityTagger;
use semtag::capabilities::NameLists;
use semtag::document::{Candidate, CandidateSet, TagKind};

use crate::common;

/// A line consisting of exactly one name run becomes the speaker
#[test]
fn test_nameFallback_withNameLine_shouldTagSpeaker() {
    let text = "Dr. Jane Smith\nwill give the annual talk";
    let tagger = ScriptedEntityTagger::with_persons(["Jane"]);
    let names = NameLists::builtin();
    let mut candidates = CandidateSet::new();

    NameFallback::extract(text, &mut candidates, &tagger, &names);

    assert!(candidates.contains(&Candidate::new("Dr. Jane Smith", TagKind::Speaker)));
}

/// Only the first matching line is tagged
#[test]
fn test_nameFallback_withTwoNameLines_shouldTagOnlyFirst() {
    let text = "John Smith\nintroduces\nMary Johnson";
    let tagger = ScriptedEntityTagger::default();
    let names = NameLists::builtin();
    let mut candidates = CandidateSet::new();

    NameFallback::extract(text, &mut candidates, &tagger, &names);

    assert!(candidates.contains(&Candidate::new("John Smith", TagKind::Speaker)));
    assert_eq!(candidates.len(), 1);
}

/// A name embedded in prose never matches, the whole line must be the
/// run
#[test]
fn test_nameFallback_withNameInsideProse_shouldTagNothing() {
    let text = "we expect John Smith to attend the talk";
    let tagger = ScriptedEntityTagger::default();
    let names = NameLists::builtin();
    let mut candidates = CandidateSet::new();

    NameFallback::extract(text, &mut candidates, &tagger, &names);

    assert!(candidates.is_empty());
}

/// Gazetteer matching is case-insensitive but the candidate carries the
/// document's own casing
#[test]
fn test_locationFallback_withDifferentCasing_shouldKeepDocumentCasing() {
    let ctx = common::run_context(0.0, 0.0, &["Wean Hall"]);
    let mut candidates = CandidateSet::new();

    LocationFallback::extract("meet in WEAN HALL at noon", &mut candidates, &ctx);

    assert!(candidates.contains(&Candidate::new("WEAN HALL", TagKind::Location)));
}

#[test]
fn test_locationFallback_withRepeatedLocation_shouldDeduplicate() {
    let ctx = common::run_context(0.0, 0.0, &["Wean Hall"]);
    let mut candidates = CandidateSet::new();

    LocationFallback::extract("Wean Hall, yes, Wean Hall", &mut candidates, &ctx);

    assert_eq!(candidates.len(), 1);
    assert!(candidates.contains(&Candidate::new("Wean Hall", TagKind::Location)));
}

#[test]
fn test_locationFallback_withUnknownLocation_shouldTagNothing() {
    let ctx = common::run_context(0.0, 0.0, &["Wean Hall"]);
    let mut candidates = CandidateSet::new();

    LocationFallback::extract("meet in Baker Hall", &mut candidates, &ctx);

    assert!(candidates.is_empty());
}
