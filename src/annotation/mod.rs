/*!
 * Extraction-and-annotation pipeline.
 *
 * The stages, leaves first:
 * - `training`: sentence-length thresholds and the seed gazetteer
 * - `context`: run-scoped state shared by every document in a run
 * - `header`: pattern rules over structured header lines
 * - `relations`: ordered fallback patterns over free-text prose
 * - `segmenter`: length-gated sentence/paragraph segmentation
 * - `fallback`: name and location detection when nothing else matched
 * - `tagging`: delimiter insertion and token-stream reconstruction
 * - `pipeline`: the orchestrator sequencing all of the above
 */

pub mod context;
pub mod fallback;
pub mod header;
pub mod pipeline;
pub mod relations;
pub mod segmenter;
pub mod tagging;
pub mod training;

pub use context::{Gazetteer, RunContext, Thresholds};
pub use pipeline::Pipeline;
pub use training::{GazetteerBuilder, ThresholdTrainer};
