/*!
 * External capability seams for the annotation pipeline.
 *
 * The pipeline depends on three capabilities whose implementations are
 * owned elsewhere:
 * - Sentence boundaries: paragraph text to ordered sentence substrings
 * - Named entities: tokens to parallel (token, class) pairs
 * - Lexical classification: a term to a person/place signal
 *
 * Built-in heuristic implementations live in `heuristic`, a
 * Wikipedia-backed lookup in `wiki`, and mock implementations for tests
 * in `mock`.
 */

use async_trait::async_trait;
use std::collections::HashSet;
use std::fmt::Debug;
use std::sync::Arc;

use crate::errors::CapabilityError;

pub mod heuristic;
pub mod mock;
pub mod wiki;

/// Entity class emitted by the named-entity capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityClass {
    /// Token belongs to a person name
    Person,
    /// Anything else
    Other,
}

/// Classification signal from the lexical lookup capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalClass {
    /// The term names a person
    Person,
    /// The term names a place or organization
    Place,
}

/// Sentence-boundary capability: paragraph text to an ordered list of
/// sentence substrings.
pub trait SentenceSplitter: Send + Sync + Debug {
    /// Split one paragraph into sentence candidates, in document order.
    fn split_sentences(&self, paragraph: &str) -> Vec<String>;
}

/// Named-entity capability: tokenized text to a parallel list of
/// (token, entity class) pairs.
pub trait EntityTagger: Send + Sync + Debug {
    /// Classify each token. The output keeps the input order and length.
    fn tag_entities(&self, tokens: &[String]) -> Vec<(String, EntityClass)>;
}

/// Lexical classification capability distinguishing person from
/// place/organization.
///
/// `Ok(None)` means no usable signal; callers default that to "person",
/// and they apply the same fail-open default on `Err`.
#[async_trait]
pub trait LexicalLookup: Send + Sync + Debug {
    /// Classify a term, or report that nothing useful was found.
    async fn classify_term(&self, term: &str) -> Result<Option<LexicalClass>, CapabilityError>;
}

/// Static reference lists: given/family names and honorific titles.
/// Configuration data, never mutated at runtime.
#[derive(Debug, Clone, Default)]
pub struct NameLists {
    names: HashSet<String>,
    titles: HashSet<String>,
}

impl NameLists {
    /// Build reference lists from explicit entries.
    pub fn new(
        names: impl IntoIterator<Item = String>,
        titles: impl IntoIterator<Item = String>,
    ) -> Self {
        NameLists {
            names: names.into_iter().map(|n| n.to_lowercase()).collect(),
            titles: titles.into_iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    /// Modest built-in lists covering common English given and family
    /// names plus the usual honorifics.
    pub fn builtin() -> Self {
        const NAMES: &[&str] = &[
            "james", "john", "robert", "michael", "william", "david", "richard", "joseph",
            "thomas", "charles", "daniel", "matthew", "donald", "mark", "paul", "steven",
            "andrew", "kenneth", "george", "joshua", "kevin", "brian", "edward", "peter",
            "mary", "patricia", "jennifer", "linda", "elizabeth", "barbara", "susan",
            "jessica", "sarah", "karen", "nancy", "lisa", "margaret", "betty", "sandra",
            "ashley", "dorothy", "kimberly", "emily", "donna", "michelle", "carol",
            "amanda", "melissa", "deborah", "laura", "anna", "maria", "alice", "emma",
            "smith", "johnson", "williams", "brown", "jones", "garcia", "miller", "davis",
            "wilson", "anderson", "taylor", "thomas", "moore", "jackson", "martin", "lee",
            "thompson", "white", "harris", "clark", "lewis", "walker", "young", "santos",
            "evans", "turner", "baker", "collins", "stewart", "murphy", "cook", "morgan",
        ];
        const TITLES: &[&str] = &[
            "mr", "mrs", "ms", "dr", "professor", "prof", "doctor", "md", "phd",
        ];
        Self::new(
            NAMES.iter().map(|n| n.to_string()),
            TITLES.iter().map(|t| t.to_string()),
        )
    }

    /// Whether a single token appears in the given/family-name list.
    pub fn is_name(&self, token: &str) -> bool {
        self.names.contains(&token.to_lowercase())
    }

    /// Whether a token is an honorific title (case-insensitive).
    pub fn is_title(&self, token: &str) -> bool {
        self.titles.contains(&token.to_lowercase())
    }

    /// Whether any whitespace-separated word of a phrase is a known name.
    pub fn contains_any_name(&self, phrase: &str) -> bool {
        phrase.split_whitespace().any(|w| self.is_name(w))
    }
}

/// Bundle of capability handles passed into the pipeline.
#[derive(Debug, Clone)]
pub struct Capabilities {
    /// Sentence-boundary capability
    pub sentences: Arc<dyn SentenceSplitter>,
    /// Named-entity capability
    pub entities: Arc<dyn EntityTagger>,
    /// Lexical classification capability
    pub lexicon: Arc<dyn LexicalLookup>,
    /// Static name and title reference lists
    pub names: Arc<NameLists>,
}

impl Capabilities {
    /// Built-in heuristic capabilities; no network access, lexical lookup
    /// always reports no signal (so every speaker candidate passes the
    /// fail-open default).
    pub fn heuristic() -> Self {
        let names = Arc::new(NameLists::builtin());
        Capabilities {
            sentences: Arc::new(heuristic::RuleSentenceSplitter),
            entities: Arc::new(heuristic::NameListEntityTagger::new(Arc::clone(&names))),
            lexicon: Arc::new(heuristic::NoSignalLookup),
            names,
        }
    }

    /// Heuristic capabilities with an explicit lexical lookup backend.
    pub fn with_lookup(lexicon: Arc<dyn LexicalLookup>) -> Self {
        Capabilities {
            lexicon,
            ..Self::heuristic()
        }
    }
}
