//! Path validation performed before a word list is opened.

use crate::error::{LookupError, Result};
use std::fs::File;
use std::path::Path;

/// Validate that a word list path is accessible and worth loading
///
/// # Error Cases
/// - [`LookupError::FileNotFound`] when the path does not exist
/// - [`LookupError::NotAFile`] for directories and other non-regular files
/// - [`LookupError::EmptyFile`] for zero-byte files
/// - [`LookupError::FileError`] when metadata or read permission is unavailable
pub fn validate_word_list_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(LookupError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let metadata = std::fs::metadata(path)
        .map_err(|e| LookupError::file_error("Failed to read file metadata", e))?;

    if !metadata.is_file() {
        return Err(LookupError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    if metadata.len() == 0 {
        return Err(LookupError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    File::open(path).map_err(|e| LookupError::file_error("Cannot open file for reading", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn create_test_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content).expect("Failed to write test content");
        file.flush().expect("Failed to flush test file");
        file
    }

    #[test]
    fn test_validate_valid_file() {
        let test_file = create_test_file(b"abe\tabe\t\tsb.\t1\n");
        assert!(validate_word_list_path(test_file.path()).is_ok());
    }

    #[test]
    fn test_validate_nonexistent_file() {
        let missing = Path::new("/this/word/list/does/not/exist.csv");
        match validate_word_list_path(missing) {
            Err(LookupError::FileNotFound { path }) => assert_eq!(path, missing),
            other => panic!("Expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_empty_file() {
        let empty_file = create_test_file(&[]);
        assert!(matches!(
            validate_word_list_path(empty_file.path()),
            Err(LookupError::EmptyFile { .. })
        ));
    }

    #[test]
    fn test_validate_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        assert!(matches!(
            validate_word_list_path(temp_dir.path()),
            Err(LookupError::NotAFile { .. })
        ));
    }
}
