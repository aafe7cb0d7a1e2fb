/*!
 * Tests for the document model and tokenization
 */

use semtag::document::{
    is_all_punctuation, strip_inserted_markers, strip_markers, tokenize, Document,
};

/// Test splitting a raw announcement into header and body
#[test]
fn test_parse_withBlankLine_shouldSplitHeaderAndBody() {
    let doc = Document::parse("Time: 3pm\nPlace: Wean Hall\n\nThe talk is about parsing.");
    assert_eq!(doc.header, "Time: 3pm\nPlace: Wean Hall");
    assert_eq!(doc.body, "The talk is about parsing.");
}

/// Test that input without a blank line is all body
#[test]
fn test_parse_withNoBlankLine_shouldBeAllBody() {
    let doc = Document::parse("Just one block of text.");
    assert!(doc.header.is_empty());
    assert_eq!(doc.body, "Just one block of text.");
}

/// Test that only the first blank line splits
#[test]
fn test_parse_withSeveralBlankLines_shouldSplitAtFirst() {
    let doc = Document::parse("Header\n\nFirst para.\n\nSecond para.");
    assert_eq!(doc.header, "Header");
    assert_eq!(doc.body, "First para.\n\nSecond para.");
}

#[test]
fn test_stripMarkers_withCorpusMarkers_shouldRemoveAllIncludingDate() {
    let tagged = "on <date>Monday</date> at <stime>3pm</stime> in <location>Wean Hall</location>";
    assert_eq!(strip_markers(tagged), "on Monday at 3pm in Wean Hall");
}

/// Inserted entity markers carry one padding space that stripping must
/// also remove to recover the original text
#[test]
fn test_stripInsertedMarkers_withPaddedMarkers_shouldRecoverOriginal() {
    let original = "starts at 3pm in Wean Hall";
    let annotated = "starts at <stime>3pm </stime> in <location>Wean Hall </location>";
    assert_eq!(strip_inserted_markers(annotated), original);
}

#[test]
fn test_stripInsertedMarkers_withStructuralMarkers_shouldRemoveUnpadded() {
    let annotated = "<paragraph><sentence>Hello there</sentence>.</paragraph>";
    assert_eq!(strip_inserted_markers(annotated), "Hello there.");
}

/// Short words keep a trailing period so honorifics and initials survive
#[test]
fn test_tokenize_withHonorific_shouldKeepPeriodAttached() {
    let tokens = tokenize("Dr. J. Smith arrived.");
    assert_eq!(tokens, vec!["Dr.", "J.", "Smith", "arrived", "."]);
}

#[test]
fn test_tokenize_withPunctuation_shouldEmitSeparateTokens() {
    let tokens = tokenize("Wean Hall, room 5409");
    assert_eq!(tokens, vec!["Wean", "Hall", ",", "room", "5409"]);
}

#[test]
fn test_isAllPunctuation_shouldOnlyAcceptPurePunctuation() {
    assert!(is_all_punctuation("."));
    assert!(is_all_punctuation("?!"));
    assert!(!is_all_punctuation("Dr."));
    assert!(!is_all_punctuation(""));
}
