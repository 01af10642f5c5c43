/*!
 * Common test utilities for the scriptcue test suite
 */

use std::path::PathBuf;
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample narration script for testing
pub fn create_test_script(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = "[HOOK]\n\
Have you ever wondered how subtitles are made?\n\
Today we find out.\n\
\n\
[MAIN]\n\
Every sentence gets its own time slot.\n\
Longer sentences stay on screen longer!\n\
\n\
[OUTRO]\n\
Thanks for watching.\n";
    create_test_file(dir, filename, content)
}
