/*!
 * Common test utilities for the variorum test suite
 */

use std::fs;
use std::path::PathBuf;

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

/// Creates a small annotated play document for testing
pub fn create_test_play(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = r#"{
  "ACT 1. SCENE 1.": {
    "1": {
      "play": "Bernardo: Who's there?",
      "notes": [
        "1. Who's there?] Capell notes the challenge is reversed.",
        "1. there?] See Furness for the stage history."
      ]
    },
    "2": {
      "play": "Francisco: Nay, answer me.",
      "notes": []
    }
  },
  "ACT 1. SCENE 2.": {
    "1": {
      "play": "King: Though yet of Hamlet our dear brother's death",
      "notes": [
        "1. brother's death] Abott on the possessive; cf. Theobald."
      ]
    }
  }
}"#;
    create_test_file(dir, filename, content)
}
