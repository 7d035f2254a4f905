use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory for scenario files
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a scenario file with content
pub fn create_test_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Create a file with raw bytes
pub fn create_test_bytes(dir: &TempDir, filename: &str, bytes: &[u8]) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, bytes).unwrap();
    file_path
}
