/*!
 * Full app lifecycle tests: training, annotation runs and evaluation
 * through the controller
 */

use anyhow::Result;
use tokio_test;

use semtag::annotation::Thresholds;
use semtag::app_config::Config;
use semtag::app_controller::Controller;
use semtag::file_utils::FileManager;

use crate::common;

fn test_config(training_dir: &std::path::Path, output_dir: &std::path::Path) -> Config {
    Config {
        training_dir: training_dir.to_string_lossy().to_string(),
        output_dir: output_dir.to_string_lossy().to_string(),
        ..Config::default()
    }
}

/// Training derives thresholds from the corpus word average and seeds
/// the gazetteer from its location spans
#[test]
fn test_train_withSampleCorpus_shouldDeriveThresholdsAndGazetteer() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let train_dir = temp_dir.path().join("train");
    FileManager::ensure_dir(&train_dir)?;
    common::create_test_file(&train_dir, "sample.txt", common::sample_training_doc())?;

    let controller = Controller::with_config(test_config(&train_dir, temp_dir.path()))?;
    let ctx = controller.train()?;

    // 24 words over 2 sentences: average 12
    assert_eq!(ctx.thresholds, Thresholds::new(6.0, 18.0));
    assert_eq!(ctx.location_count(), 1);
    assert!(ctx.known_locations().contains(&"Wean Hall 5409".to_string()));
    Ok(())
}

/// Training fails loudly on a missing or empty corpus directory
#[test]
fn test_train_withMissingCorpus_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = test_config(&temp_dir.path().join("absent"), temp_dir.path());
    let controller = Controller::with_config(config)?;

    assert!(controller.train().is_err());
    Ok(())
}

/// Annotating one file writes a tagged copy into the output directory
#[test]
fn test_run_annotate_withSingleFile_shouldWriteTaggedOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let train_dir = temp_dir.path().join("train");
    let output_dir = temp_dir.path().join("out");
    FileManager::ensure_dir(&train_dir)?;
    common::create_test_file(&train_dir, "sample.txt", common::sample_training_doc())?;

    let input = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "announcement.txt",
        "Time: 3pm - 4pm\n\nSee you there soon.\n",
    )?;

    let controller = Controller::with_config(test_config(&train_dir, &output_dir))?;
    let result = tokio_test::block_on(async { controller.run_annotate(input, false).await });
    assert!(result.is_ok(), "Annotation run should complete without errors");

    let output = FileManager::read_to_string(output_dir.join("announcement.txt"))?;
    assert!(output.contains("<stime>3pm </stime>"));
    assert!(output.contains("<etime>4pm </etime>"));
    Ok(())
}

/// An existing output file is preserved unless overwriting is forced
#[tokio::test]
async fn test_run_annotate_withExistingOutput_shouldSkipUnlessForced() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let train_dir = temp_dir.path().join("train");
    let output_dir = temp_dir.path().join("out");
    FileManager::ensure_dir(&train_dir)?;
    common::create_test_file(&train_dir, "sample.txt", common::sample_training_doc())?;

    let input = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "announcement.txt",
        "Time: 3pm\n\nShort note.\n",
    )?;
    FileManager::ensure_dir(&output_dir)?;
    common::create_test_file(&output_dir, "announcement.txt", "sentinel")?;

    let controller = Controller::with_config(test_config(&train_dir, &output_dir))?;

    controller.run_annotate(input.clone(), false).await?;
    assert_eq!(
        FileManager::read_to_string(output_dir.join("announcement.txt"))?,
        "sentinel"
    );

    controller.run_annotate(input, true).await?;
    assert!(
        FileManager::read_to_string(output_dir.join("announcement.txt"))?.contains("<stime>3pm </stime>")
    );
    Ok(())
}

/// Annotating a directory processes every file in it
#[tokio::test]
async fn test_run_annotate_withDirectory_shouldProcessAllFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let train_dir = temp_dir.path().join("train");
    let input_dir = temp_dir.path().join("in");
    let output_dir = temp_dir.path().join("out");
    FileManager::ensure_dir(&train_dir)?;
    FileManager::ensure_dir(&input_dir)?;
    common::create_test_file(&train_dir, "sample.txt", common::sample_training_doc())?;
    common::create_test_file(&input_dir, "one.txt", "Time: 1pm\n\nFirst one.\n")?;
    common::create_test_file(&input_dir, "two.txt", "Time: 2pm\n\nSecond one.\n")?;

    let controller = Controller::with_config(test_config(&train_dir, &output_dir))?;
    controller.run_annotate(input_dir, false).await?;

    assert!(FileManager::file_exists(output_dir.join("one.txt")));
    assert!(FileManager::file_exists(output_dir.join("two.txt")));
    Ok(())
}

/// Evaluation re-annotates detagged ground truth and writes the results
#[test]
fn test_run_evaluate_withTaggedCorpus_shouldWriteOutputs() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let train_dir = temp_dir.path().join("train");
    let test_dir = temp_dir.path().join("test");
    let output_dir = temp_dir.path().join("out");
    FileManager::ensure_dir(&train_dir)?;
    FileManager::ensure_dir(&test_dir)?;
    common::create_test_file(&train_dir, "sample.txt", common::sample_training_doc())?;
    common::create_test_file(&test_dir, "held_out.txt", common::sample_training_doc())?;

    let controller = Controller::with_config(test_config(&train_dir, &output_dir))?;
    let result = tokio_test::block_on(async { controller.run_evaluate(test_dir).await });
    assert!(result.is_ok(), "Evaluation run should complete without errors");

    assert!(FileManager::file_exists(output_dir.join("held_out.txt")));
    Ok(())
}
