/*!
 * Training over an annotated corpus: sentence-length thresholds and the
 * initial gazetteer.
 */

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::annotation::context::{Gazetteer, Thresholds};
use crate::document::{is_all_punctuation, strip_markers, tokenize, SENTENCE_OPEN};

static LOCATION_SPAN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<location>(.*?)</location>").unwrap());

/// Learns sentence-length acceptance bounds from a labeled corpus.
pub struct ThresholdTrainer;

impl ThresholdTrainer {
    /// Average sentence length (in words, punctuation-only tokens
    /// excluded) over the corpus; bounds are 0.5x and 1.5x the average.
    ///
    /// Note the unit mismatch carried over from the original design: the
    /// average is measured in words here but compared against character
    /// length at inference time.
    pub fn train<'a>(corpus: impl IntoIterator<Item = &'a str>) -> Thresholds {
        let mut total_words = 0u64;
        let mut total_sentences = 0u64;

        for doc in corpus {
            total_sentences += doc.matches(SENTENCE_OPEN).count() as u64;
            let plain = strip_markers(doc);
            total_words += tokenize(&plain)
                .iter()
                .filter(|token| !is_all_punctuation(token))
                .count() as u64;
        }

        if total_sentences == 0 {
            warn!("training corpus held no sentence markers; thresholds will reject everything");
            return Thresholds::default();
        }

        let avg = total_words as f64 / total_sentences as f64;
        let thresholds = Thresholds::new(0.5 * avg, 1.5 * avg);
        debug!(
            "trained thresholds from {} words / {} sentences: lower={:.2} upper={:.2}",
            total_words, total_sentences, thresholds.lower, thresholds.upper
        );
        thresholds
    }
}

/// Extracts known location strings from the annotated corpus.
pub struct GazetteerBuilder;

impl GazetteerBuilder {
    /// Collect every `<location>` span, nested markers stripped.
    pub fn build<'a>(corpus: impl IntoIterator<Item = &'a str>) -> Gazetteer {
        let mut gazetteer = Gazetteer::new();
        for doc in corpus {
            for cap in LOCATION_SPAN_REGEX.captures_iter(doc) {
                let name = strip_markers(&cap[1]);
                gazetteer.insert(name);
            }
        }
        debug!("seeded gazetteer with {} location(s)", gazetteer.len());
        gazetteer
    }
}
