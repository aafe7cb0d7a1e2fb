/*!
 * Pipeline orchestrator sequencing the extraction stages for one
 * document.
 *
 * The pipeline is total over its input: a document matching nothing
 * comes back with structural markers only, if any. Processing one
 * document can grow the gazetteer and thereby affect later documents in
 * the same run; callers fix a deterministic document order to keep that
 * reproducible.
 */

use log::debug;
use std::sync::Arc;

use crate::annotation::context::RunContext;
use crate::annotation::fallback::{LocationFallback, NameFallback};
use crate::annotation::header::HeaderExtractor;
use crate::annotation::relations::RelationExtractor;
use crate::annotation::segmenter::Segmenter;
use crate::annotation::tagging::{detokenize, Reconstructor, TagInserter};
use crate::capabilities::Capabilities;
use crate::document::{has_kind, CandidateSet, Document, TagKind};

/// Orchestrates the full annotation of one document.
pub struct Pipeline {
    capabilities: Capabilities,
    segmenter: Segmenter,
}

impl Pipeline {
    /// Create a pipeline over a bundle of capabilities.
    pub fn new(capabilities: Capabilities) -> Self {
        let segmenter = Segmenter::new(Arc::clone(&capabilities.sentences));
        Pipeline {
            capabilities,
            segmenter,
        }
    }

    /// Annotate one raw document end to end.
    pub async fn annotate(&self, raw: &str, ctx: &RunContext) -> String {
        let doc = Document::parse(raw);
        let mut candidates = CandidateSet::new();

        HeaderExtractor::extract(&doc.header, &mut candidates, ctx);
        // Many announcements embed a second header inside the body, so
        // the header rules run over it unconditionally.
        HeaderExtractor::extract(&doc.body, &mut candidates, ctx);

        RelationExtractor::extract(
            &doc.body,
            &mut candidates,
            ctx,
            self.capabilities.lexicon.as_ref(),
            &self.capabilities.names,
        )
        .await;

        let tokens = self.segmenter.segment(&doc.body, &ctx.thresholds);

        if !has_kind(&candidates, TagKind::Speaker) {
            NameFallback::extract(
                &doc.body,
                &mut candidates,
                self.capabilities.entities.as_ref(),
                &self.capabilities.names,
            );
            NameFallback::extract(
                &doc.header,
                &mut candidates,
                self.capabilities.entities.as_ref(),
                &self.capabilities.names,
            );
        }
        if !has_kind(&candidates, TagKind::Location) {
            LocationFallback::extract(&doc.body, &mut candidates, ctx);
            LocationFallback::extract(&doc.header, &mut candidates, ctx);
        }

        debug!("document produced {} candidate tag(s)", candidates.len());

        let tagged_body = TagInserter::insert(&detokenize(&tokens), &candidates);
        let body = Reconstructor::reconstruct(&tagged_body);

        if doc.header.is_empty() {
            body
        } else {
            let header = TagInserter::insert_lines(&doc.header, &candidates);
            format!("{}\n\n{}", header, body)
        }
    }
}
