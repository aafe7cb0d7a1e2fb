use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::annotation::{GazetteerBuilder, Pipeline, RunContext, ThresholdTrainer};
use crate::app_config::Config;
use crate::capabilities::wiki::WikiLookup;
use crate::capabilities::Capabilities;
use crate::document::strip_markers;
use crate::evaluation::{Scorecard, EVAL_TAGS};
use crate::file_utils::FileManager;

// @module: Application controller for annotation runs

/// Main application controller for document annotation
pub struct Controller {
    // @field: App configuration
    config: Config,
    pipeline: Pipeline,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let capabilities = if config.lookup.enabled {
            let lookup = WikiLookup::new(
                &config.lookup.endpoint,
                Duration::from_secs(config.lookup.timeout_secs),
            )
            .context("Failed to create lexical lookup client")?;
            Capabilities::with_lookup(Arc::new(lookup))
        } else {
            Capabilities::heuristic()
        };

        Ok(Self {
            config,
            pipeline: Pipeline::new(capabilities),
        })
    }

    /// Train thresholds and the seed gazetteer from the configured
    /// corpus of hand-tagged documents.
    pub fn train(&self) -> Result<RunContext> {
        let training_dir = &self.config.training_dir;
        if !FileManager::dir_exists(training_dir) {
            return Err(anyhow!("Training directory does not exist: {:?}", training_dir));
        }

        let files = FileManager::corpus_files(training_dir)?;
        if files.is_empty() {
            return Err(anyhow!("Training directory is empty: {:?}", training_dir));
        }

        let mut corpus = Vec::with_capacity(files.len());
        for file in &files {
            corpus.push(FileManager::read_to_string(file)?);
        }

        let thresholds = ThresholdTrainer::train(corpus.iter().map(String::as_str));
        let gazetteer = GazetteerBuilder::build(corpus.iter().map(String::as_str));
        info!(
            "Trained on {} document(s), gazetteer holds {} location(s)",
            files.len(),
            gazetteer.len()
        );

        Ok(RunContext::new(thresholds, gazetteer))
    }

    /// Annotate a single file or every file of a directory, writing the
    /// results into the configured output directory.
    pub async fn run_annotate(&self, input_path: PathBuf, force_overwrite: bool) -> Result<()> {
        let ctx = self.train()?;

        if input_path.is_file() {
            self.annotate_file(&input_path, &ctx, force_overwrite).await?;
            return Ok(());
        }
        if !input_path.is_dir() {
            return Err(anyhow!("Input path does not exist: {:?}", input_path));
        }

        let files = FileManager::corpus_files(&input_path)?;
        if files.is_empty() {
            warn!("No files found in directory: {:?}", input_path);
            return Ok(());
        }

        let progress = ProgressBar::new(files.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let mut annotated = 0usize;
        for file in &files {
            progress.set_message(
                file.file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
            );
            if self.annotate_file(file, &ctx, force_overwrite).await? {
                annotated += 1;
            }
            progress.inc(1);
        }
        progress.finish_and_clear();

        info!("Annotated {} of {} file(s)", annotated, files.len());
        Ok(())
    }

    /// Annotate one file into the output directory. Returns false when
    /// the output already existed and overwriting was not forced.
    async fn annotate_file(
        &self,
        input_file: &Path,
        ctx: &RunContext,
        force_overwrite: bool,
    ) -> Result<bool> {
        let file_name = input_file
            .file_name()
            .ok_or_else(|| anyhow!("Input path has no file name: {:?}", input_file))?;
        let output_path = Path::new(&self.config.output_dir).join(file_name);

        if output_path.exists() && !force_overwrite {
            warn!(
                "Skipping {:?}, output already exists (use -f to force overwrite)",
                file_name
            );
            return Ok(false);
        }

        let raw = FileManager::read_to_string(input_file)?;
        let tagged = self.pipeline.annotate(&raw, ctx).await;
        FileManager::write_to_file(&output_path, &tagged)?;
        Ok(true)
    }

    /// Score the annotator against a directory of hand-tagged documents.
    /// Each test file is stripped of its markers, re-annotated, written
    /// to the output directory, and compared against the original.
    pub async fn run_evaluate(&self, test_dir: PathBuf) -> Result<()> {
        let ctx = self.train()?;

        if !test_dir.is_dir() {
            return Err(anyhow!("Test directory does not exist: {:?}", test_dir));
        }
        let files = FileManager::corpus_files(&test_dir)?;
        if files.is_empty() {
            return Err(anyhow!("Test directory is empty: {:?}", test_dir));
        }

        let mut scorecard = Scorecard::new();
        let progress = ProgressBar::new(files.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        for file in &files {
            progress.set_message(
                file.file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
            );

            let truth = FileManager::read_to_string(file)?;
            let plain = strip_markers(&truth);
            let mine = self.pipeline.annotate(&plain, &ctx).await;

            if let Some(file_name) = file.file_name() {
                let output_path = Path::new(&self.config.output_dir).join(file_name);
                FileManager::write_to_file(&output_path, &mine)?;
            }

            scorecard.record(&mine, &truth);
            progress.inc(1);
        }
        progress.finish_and_clear();

        info!("Evaluated {} document(s):", scorecard.document_count());
        for tag in EVAL_TAGS {
            if let Some(score) = scorecard.average(tag) {
                info!(
                    "<{}> precision: {:.2} recall: {:.2} f-measure: {:.2}",
                    tag, score.precision, score.recall, score.f_measure
                );
            }
        }
        Ok(())
    }
}
