/*!
 * Run-scoped shared state: trained thresholds and the growing gazetteer.
 *
 * Both are created when a run starts and discarded when it ends. The
 * thresholds are write-once; the gazetteer grows monotonically as
 * extraction discovers new locations, which makes later documents in a
 * run depend on earlier ones. Callers must fix a deterministic document
 * order if reproducibility matters.
 */

use parking_lot::RwLock;
use std::collections::BTreeSet;

/// Learned sentence-length acceptance bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Lower bound, exclusive
    pub lower: f64,
    /// Upper bound, exclusive
    pub upper: f64,
}

impl Thresholds {
    /// Create explicit bounds.
    pub fn new(lower: f64, upper: f64) -> Self {
        Thresholds { lower, upper }
    }

    /// Whether a sentence of the given character length falls strictly
    /// between the bounds.
    pub fn accepts(&self, char_len: usize) -> bool {
        let len = char_len as f64;
        self.lower < len && len < self.upper
    }
}

impl Default for Thresholds {
    /// Degenerate bounds that reject every candidate; produced when the
    /// training corpus held no sentences.
    fn default() -> Self {
        Thresholds { lower: 0.0, upper: 0.0 }
    }
}

/// Growing set of known location-name strings, used as a fallback
/// detector. Seeded from the training corpus, extended during extraction,
/// never shrunk.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    entries: BTreeSet<String>,
}

impl Gazetteer {
    /// Create an empty gazetteer.
    pub fn new() -> Self {
        Gazetteer::default()
    }

    /// Add a location name; returns false if it was already known.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.entries.insert(trimmed.to_string())
    }

    /// Whether the exact name is known.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains(name)
    }

    /// Number of known locations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no locations are known.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the known names in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.entries.iter()
    }
}

/// Explicit run-scoped context object: created at pipeline start,
/// populated by the training stage, passed by reference into every
/// extraction call.
#[derive(Debug)]
pub struct RunContext {
    /// Sentence-length bounds, immutable after training
    pub thresholds: Thresholds,
    gazetteer: RwLock<Gazetteer>,
}

impl RunContext {
    /// Build a context from training output.
    pub fn new(thresholds: Thresholds, gazetteer: Gazetteer) -> Self {
        RunContext {
            thresholds,
            gazetteer: RwLock::new(gazetteer),
        }
    }

    /// Record a newly discovered location. Writers are serialized; a
    /// blank name is ignored.
    pub fn add_location(&self, name: &str) {
        self.gazetteer.write().insert(name);
    }

    /// Consistent snapshot of the known locations for one document's
    /// fallback pass.
    pub fn known_locations(&self) -> Vec<String> {
        self.gazetteer.read().iter().cloned().collect()
    }

    /// Number of known locations.
    pub fn location_count(&self) -> usize {
        self.gazetteer.read().len()
    }
}
