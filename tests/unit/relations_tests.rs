/*!
 * Tests for prose relation extraction
 */

use semtag::annotation::relations::RelationExtractor;
use semtag::capabilities::mock::MockLookup;
use semtag::capabilities::NameLists;
use semtag::document::{Candidate, CandidateSet, TagKind};

use crate::common;

async fn extract(body: &str, lookup: &MockLookup) -> CandidateSet {
    let ctx = common::permissive_context();
    let names = NameLists::builtin();
    let mut candidates = CandidateSet::new();
    RelationExtractor::extract(body, &mut candidates, &ctx, lookup, &names).await;
    candidates
}

/// "held in <location> at <time> on <date>" yields both the venue and
/// the start time
#[tokio::test]
async fn test_extract_withVenueTimeThenDate_shouldYieldLocationAndTime() {
    let body = "The seminar will be held in Wean Hall at 3pm on Monday.";
    let candidates = extract(body, &MockLookup::no_signal()).await;

    assert!(candidates.contains(&Candidate::new("Wean Hall", TagKind::Location)));
    assert!(candidates.contains(&Candidate::new("3pm", TagKind::Stime)));
}

#[tokio::test]
async fn test_extract_withVenueDateThenTime_shouldYieldLocationAndTime() {
    let body = "The talk will be held in Baker Hall on Monday at 4pm";
    let candidates = extract(body, &MockLookup::no_signal()).await;

    assert!(candidates.contains(&Candidate::new("Baker Hall", TagKind::Location)));
    assert!(candidates.contains(&Candidate::new("4pm", TagKind::Stime)));
}

/// Extracted venues also grow the run gazetteer
#[tokio::test]
async fn test_extract_withVenue_shouldFeedGazetteer() {
    let ctx = common::permissive_context();
    let names = NameLists::builtin();
    let mut candidates = CandidateSet::new();
    let body = "The seminar will be held in Wean Hall at 3pm on Monday.";
    RelationExtractor::extract(body, &mut candidates, &ctx, &MockLookup::no_signal(), &names)
        .await;

    assert!(ctx.known_locations().contains(&"Wean Hall".to_string()));
}

#[tokio::test]
async fn test_extract_withSpeakerAndTopic_shouldYieldSpeaker() {
    let body = "John Smith will speak about type systems.";
    let candidates = extract(body, &MockLookup::no_signal()).await;

    assert!(candidates.contains(&Candidate::new("John Smith", TagKind::Speaker)));
}

/// A subject the lookup classifies as a place is rejected as a speaker
#[tokio::test]
async fn test_extract_withPlaceClassifiedSubject_shouldRejectSpeaker() {
    let body = "Xylos Corp will present a talk about robotics.";
    let candidates = extract(body, &MockLookup::place()).await;

    assert!(!candidates.iter().any(|c| c.kind == TagKind::Speaker));
}

/// Name-list membership accepts the subject without consulting the
/// lookup at all
#[tokio::test]
async fn test_extract_withKnownName_shouldSkipLookup() {
    let body = "John Smith will speak about type systems.";
    let candidates = extract(body, &MockLookup::place()).await;

    assert!(candidates.contains(&Candidate::new("John Smith", TagKind::Speaker)));
}

/// No signal and lookup failure both fall open to accepting the subject
#[tokio::test]
async fn test_extract_withFailingLookup_shouldFallOpenToPerson() {
    let body = "Xylos Corp will present a talk about robotics.";

    let with_no_signal = extract(body, &MockLookup::no_signal()).await;
    assert!(with_no_signal.contains(&Candidate::new("Xylos Corp", TagKind::Speaker)));

    let with_failure = extract(body, &MockLookup::failing()).await;
    assert!(with_failure.contains(&Candidate::new("Xylos Corp", TagKind::Speaker)));
}

#[tokio::test]
async fn test_extract_withEventAtTime_shouldYieldTime() {
    let body = "Seminars on parsing will be held at 3 pm";
    let candidates = extract(body, &MockLookup::no_signal()).await;

    assert!(candidates.contains(&Candidate::new("3 pm", TagKind::Stime)));
}

#[tokio::test]
async fn test_extract_withNoMatchingPattern_shouldYieldNothing() {
    let body = "This text mentions nothing of interest whatsoever.";
    let candidates = extract(body, &MockLookup::no_signal()).await;

    assert!(candidates.is_empty());
}
