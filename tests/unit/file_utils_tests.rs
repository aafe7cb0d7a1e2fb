/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use semtag::file_utils::FileManager;

use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file =
        common::create_test_file(&temp_dir.path().to_path_buf(), "announcement.txt", "Time: 3pm")?;

    assert!(FileManager::file_exists(&test_file));
    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that ensure_dir creates nested directories
#[test]
fn test_ensure_dir_withNestedPath_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b");

    FileManager::ensure_dir(&nested)?;
    assert!(FileManager::dir_exists(&nested));
    Ok(())
}

/// Corpus files come back in a stable sorted order regardless of
/// creation order
#[test]
fn test_corpus_files_withSeveralFiles_shouldBeSorted() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "charlie.txt", "c")?;
    common::create_test_file(&dir, "alpha.txt", "a")?;
    common::create_test_file(&dir, "bravo.txt", "b")?;

    let files = FileManager::corpus_files(&dir)?;
    let names: Vec<_> = files
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
        .collect();

    assert_eq!(names, vec!["alpha.txt", "bravo.txt", "charlie.txt"]);
    Ok(())
}

/// Test writing and reading a file back
#[test]
fn test_write_to_file_thenRead_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("out").join("tagged.txt");

    FileManager::write_to_file(&path, "annotated content")?;
    assert_eq!(FileManager::read_to_string(&path)?, "annotated content");
    Ok(())
}
