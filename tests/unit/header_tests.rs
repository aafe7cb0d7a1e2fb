/*!
 * Tests for header-line extraction
 */

use semtag::annotation::header::HeaderExtractor;
use semtag::document::{Candidate, CandidateSet, TagKind};

use crate::common;

fn extract(text: &str) -> CandidateSet {
    let ctx = common::permissive_context();
    let mut candidates = CandidateSet::new();
    HeaderExtractor::extract(text, &mut candidates, &ctx);
    candidates
}

/// A time range yields a start and an end time
#[test]
fn test_extract_withTimeRange_shouldYieldStartAndEnd() {
    let candidates = extract("Time: 3pm - 4pm");
    assert!(candidates.contains(&Candidate::new("3pm", TagKind::Stime)));
    assert!(candidates.contains(&Candidate::new("4pm", TagKind::Etime)));
}

/// A single time value is a start time with no end time
#[test]
fn test_extract_withSingleTime_shouldYieldStartOnly() {
    let candidates = extract("Time: noon");
    assert!(candidates.contains(&Candidate::new("noon", TagKind::Stime)));
    assert!(!candidates.iter().any(|c| c.kind == TagKind::Etime));
}

#[test]
fn test_extract_withUntilSeparator_shouldSplitRange() {
    let candidates = extract("Time: 3:30 pm until 5:00 pm");
    assert!(candidates.contains(&Candidate::new("3:30 pm", TagKind::Stime)));
    assert!(candidates.contains(&Candidate::new("5:00 pm", TagKind::Etime)));
}

#[test]
fn test_extract_withPlaceLine_shouldYieldLocation() {
    let candidates = extract("Place: Wean Hall 5409");
    assert!(candidates.contains(&Candidate::new("Wean Hall 5409", TagKind::Location)));
}

/// Discovered places also grow the run gazetteer
#[test]
fn test_extract_withPlaceLine_shouldFeedGazetteer() {
    let ctx = common::permissive_context();
    let mut candidates = CandidateSet::new();
    HeaderExtractor::extract("Location: Baker Hall", &mut candidates, &ctx);
    assert!(ctx.known_locations().contains(&"Baker Hall".to_string()));
}

/// The speaker value stops at the first comma, dropping affiliations
#[test]
fn test_extract_withSpeakerAffiliation_shouldStopAtComma() {
    let candidates = extract("Who: Dr. Jane Smith, Professor of Computer Science");
    assert!(candidates.contains(&Candidate::new("Dr. Jane Smith", TagKind::Speaker)));
}

/// One trailing punctuation character is dropped from the speaker
#[test]
fn test_extract_withTrailingPunctuation_shouldCleanSpeaker() {
    let candidates = extract("Speaker: John Smith.");
    assert!(candidates.contains(&Candidate::new("John Smith", TagKind::Speaker)));
}

#[test]
fn test_extract_withLowercaseFieldNames_shouldStillMatch() {
    let candidates = extract("time: 3pm\nplace: Wean Hall\nwho: Jane Smith");
    assert!(candidates.contains(&Candidate::new("3pm", TagKind::Stime)));
    assert!(candidates.contains(&Candidate::new("Wean Hall", TagKind::Location)));
    assert!(candidates.contains(&Candidate::new("Jane Smith", TagKind::Speaker)));
}

#[test]
fn test_extract_withEmptyTimeValue_shouldYieldNothing() {
    let candidates = extract("Time:");
    assert!(candidates.is_empty());
}
