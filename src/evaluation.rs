/*!
 * Scoring of annotated documents against hand-tagged ground truth.
 *
 * Each of the six tag kinds is scored independently per document, and a
 * scorecard accumulates the per-document scores so the report can show
 * the average across a corpus. Span contents are compared after marker
 * stripping and tokenization, so whitespace differences inside a span do
 * not count against the annotator.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

use crate::document::{strip_markers, tokenize};

/// Tag kinds scored by the evaluator, in report order.
pub const EVAL_TAGS: [&str; 6] = [
    "stime",
    "etime",
    "location",
    "speaker",
    "sentence",
    "paragraph",
];

static SPAN_REGEXES: Lazy<BTreeMap<&'static str, Regex>> = Lazy::new(|| {
    EVAL_TAGS
        .iter()
        .map(|tag| {
            let pattern = format!(r"(?s)<{tag}>(.*?)</{tag}>");
            (*tag, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Precision of one tag over one document.
///
/// No false positives is a perfect score even when nothing was tagged;
/// absence is the correct output for a document whose truth has no such
/// tag.
pub fn precision(false_positives: usize, num_tagged: usize) -> f64 {
    if false_positives == 0 {
        1.0
    } else if num_tagged == 0 {
        0.0
    } else {
        (num_tagged - false_positives) as f64 / num_tagged as f64
    }
}

/// Recall of one tag over one document. Nothing missed is a perfect
/// score; a zero denominator with misses scores zero.
pub fn recall(num_tagged: usize, false_positives: usize, false_negatives: usize) -> f64 {
    let denominator = num_tagged - false_positives.min(num_tagged) + false_negatives;
    if false_negatives == 0 {
        1.0
    } else if denominator == 0 {
        0.0
    } else {
        (num_tagged - false_positives) as f64 / denominator as f64
    }
}

/// Harmonic mean of precision and recall, zero when both are zero.
pub fn f_measure(precision: f64, recall: f64) -> f64 {
    let sum = precision + recall;
    if sum == 0.0 {
        0.0
    } else {
        2.0 * (precision * recall) / sum
    }
}

/// Per-tag scores for one document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagScore {
    pub precision: f64,
    pub recall: f64,
    pub f_measure: f64,
}

/// Extract the tokenized contents of every `tag` span in `text`. Nested
/// markers inside a span are stripped before tokenizing.
fn tagged_spans(text: &str, tag: &'static str) -> Vec<Vec<String>> {
    SPAN_REGEXES[tag]
        .captures_iter(text)
        .map(|caps| tokenize(&strip_markers(&caps[1])))
        .collect()
}

/// Score one tag kind of one annotated document against its truth.
pub fn score_tag(mine: &str, truth: &str, tag: &'static str) -> TagScore {
    let my_spans = tagged_spans(mine, tag);
    let truth_spans = tagged_spans(truth, tag);

    // Counted per occurrence: a span tagged twice that the truth has
    // once contributes one false positive.
    let false_positives = my_spans
        .iter()
        .filter(|span| !truth_spans.contains(span))
        .count();
    let false_negatives = truth_spans
        .iter()
        .filter(|span| !my_spans.contains(span))
        .count();
    let num_tagged = my_spans.len();

    let p = precision(false_positives, num_tagged);
    let r = recall(num_tagged, false_positives, false_negatives);
    TagScore {
        precision: p,
        recall: r,
        f_measure: f_measure(p, r),
    }
}

/// Accumulates per-document scores across a corpus.
#[derive(Debug, Default)]
pub struct Scorecard {
    totals: BTreeMap<&'static str, (f64, f64, f64)>,
    documents: usize,
}

impl Scorecard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score one annotated document against its ground truth and fold
    /// the result into the running totals.
    pub fn record(&mut self, mine: &str, truth: &str) {
        for tag in EVAL_TAGS {
            let score = score_tag(mine, truth, tag);
            let entry = self.totals.entry(tag).or_insert((0.0, 0.0, 0.0));
            entry.0 += score.precision;
            entry.1 += score.recall;
            entry.2 += score.f_measure;
        }
        self.documents += 1;
    }

    pub fn document_count(&self) -> usize {
        self.documents
    }

    /// Average score of one tag across all recorded documents.
    pub fn average(&self, tag: &str) -> Option<TagScore> {
        if self.documents == 0 {
            return None;
        }
        let n = self.documents as f64;
        self.totals.get(tag).map(|(p, r, f)| TagScore {
            precision: p / n,
            recall: r / n,
            f_measure: f / n,
        })
    }
}

impl fmt::Display for Scorecard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in EVAL_TAGS {
            if let Some(score) = self.average(tag) {
                writeln!(
                    f,
                    "<{}> precision: {:.2} recall: {:.2} f-measure: {:.2}",
                    tag, score.precision, score.recall, score.f_measure
                )?;
            }
        }
        Ok(())
    }
}
