//! Input Loading Tests
//!
//! Reading text fixtures from disk.

use crate::analysis::readability_grade;
use crate::error::AppError;
use crate::input;
use std::io::Write;

#[cfg(test)]
mod file_input_tests {
    use super::*;

    #[test]
    fn test_read_text_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "The cat sat on the mat.\nIt was a good cat.").unwrap();

        let text = input::read_text_from_path(file.path()).unwrap();

        assert_eq!(text, "The cat sat on the mat.\nIt was a good cat.");
        assert!(readability_grade(&text) < 6.0);
    }

    #[test]
    fn test_read_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let text = input::read_text_from_path(file.path()).unwrap();

        assert!(text.is_empty());
        assert_eq!(readability_grade(&text), 0.0);
    }

    #[test]
    fn test_binary_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x89, 0x50, 0x4e, 0x47, 0x00, 0x00]).unwrap();

        let result = input::read_text_from_path(file.path());

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let result = input::read_text_from_path(&dir.path().join("missing.txt"));

        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
