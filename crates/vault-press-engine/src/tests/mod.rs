use crate::models::{DocumentPath, PathIndex};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary vault directory
pub fn create_test_vault() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a file in the vault, including any parent folders
pub fn create_test_file(vault: &TempDir, relative: &str, content: &str) -> PathBuf {
    let file_path = vault.path().join(relative);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Build an in-memory index from relative path strings
pub fn index_of(paths: &[&str]) -> PathIndex {
    PathIndex::from_paths(paths.iter().map(|p| DocumentPath::from(*p)))
}
