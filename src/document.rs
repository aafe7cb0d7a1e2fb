/*!
 * Document model and delimiter-marker utilities.
 *
 * An announcement is split into a header and a body at the first blank
 * line. Extraction stages propose `Candidate` spans which the tag
 * inserter later wraps with inline delimiter markers.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;

/// Structural marker opening a sentence span.
pub const SENTENCE_OPEN: &str = "<sentence>";
/// Structural marker closing a sentence span.
pub const SENTENCE_CLOSE: &str = "</sentence>";
/// Structural marker opening a paragraph span.
pub const PARAGRAPH_OPEN: &str = "<paragraph>";
/// Structural marker closing a paragraph span.
pub const PARAGRAPH_CLOSE: &str = "</paragraph>";

// Older training corpora also carry <date> markers, so stripping must
// know about them even though the pipeline never emits them.
static MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"</?(?:date|stime|etime|location|speaker|sentence|paragraph)>").unwrap()
});

// The tag inserter pads every entity delimiter with one leading space;
// structural markers are emitted unpadded.
static INSERTED_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r" ?</?(?:stime|etime|location|speaker)>|</?(?:date|sentence|paragraph)>").unwrap()
});

/// Kind of span a candidate proposes to annotate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TagKind {
    /// Seminar start time
    Stime,
    /// Seminar end time
    Etime,
    /// Venue
    Location,
    /// Presenter
    Speaker,
}

impl TagKind {
    /// Marker name as it appears inside delimiters.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stime => "stime",
            Self::Etime => "etime",
            Self::Location => "location",
            Self::Speaker => "speaker",
        }
    }

    /// Whether this kind annotates a time-of-day span.
    pub fn is_time(&self) -> bool {
        matches!(self, Self::Stime | Self::Etime)
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A (span text, tag kind) pair proposed by some extraction stage, not
/// yet committed to output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Candidate {
    /// Exact text of the span to search for in the document
    pub text: String,
    /// What the span annotates
    pub kind: TagKind,
}

impl Candidate {
    /// Create a new candidate tag.
    pub fn new(text: impl Into<String>, kind: TagKind) -> Self {
        Candidate { text: text.into(), kind }
    }
}

/// Accumulated candidates with structural equality over (text, kind).
///
/// A `BTreeSet` keeps the iteration order deterministic, which fixes the
/// order tag insertion resolves overlapping spans in.
pub type CandidateSet = BTreeSet<Candidate>;

/// Whether the set already holds a candidate of the given kind.
pub fn has_kind(candidates: &CandidateSet, kind: TagKind) -> bool {
    candidates.iter().any(|c| c.kind == kind)
}

/// An input document split into header and body at the first blank line.
/// The body may itself contain a nested header block.
#[derive(Debug, Clone)]
pub struct Document {
    /// Header lines preceding the first blank line (may be empty)
    pub header: String,
    /// Everything after the first blank line
    pub body: String,
}

impl Document {
    /// Split a raw announcement at the first blank line. Without one, the
    /// whole input is treated as body.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once("\n\n") {
            Some((header, body)) => Document {
                header: header.to_string(),
                body: body.to_string(),
            },
            None => Document {
                header: String::new(),
                body: raw.to_string(),
            },
        }
    }
}

/// Remove every known delimiter marker, recovering plain text. Used on
/// ground-truth corpora, where markers wrap spans without padding.
pub fn strip_markers(text: &str) -> String {
    MARKER_REGEX.replace_all(text, "").into_owned()
}

/// Remove markers the pipeline itself inserted, including the single
/// padding space the tag inserter adds before each entity delimiter.
/// Applying this to pipeline output recovers the pre-annotation text.
pub fn strip_inserted_markers(text: &str) -> String {
    INSERTED_MARKER_REGEX.replace_all(text, "").into_owned()
}

/// Split text into word and punctuation tokens. A period stays attached
/// to short words so honorifics and initials ("Dr.", "J.") survive as
/// single tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '\'' {
            word.push(ch);
        } else if ch == '.' && !word.is_empty() && word.chars().count() <= 4 {
            word.push(ch);
            tokens.push(std::mem::take(&mut word));
        } else {
            if !word.is_empty() {
                tokens.push(std::mem::take(&mut word));
            }
            if !ch.is_whitespace() {
                tokens.push(ch.to_string());
            }
        }
    }
    if !word.is_empty() {
        tokens.push(word);
    }
    tokens
}

/// Whether a token consists entirely of punctuation characters.
pub fn is_all_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_punctuation())
}
