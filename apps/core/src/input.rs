//! Input loading for the CLI.
//! Accepts UTF-8 text only; binary data is rejected before analysis.

use std::io::Read;
use std::path::Path;
use tracing::info;

use crate::error::AppError;

/// Decode raw bytes as analyzable text
pub fn text_from_bytes(bytes: &[u8], source: &str) -> Result<String, AppError> {
    // Basic check for binary files (contains null bytes)
    if bytes.contains(&0) {
        return Err(AppError::InvalidInput(format!(
            "{} looks like a binary file",
            source
        )));
    }

    let text = String::from_utf8(bytes.to_vec())?;
    info!("Loaded {} characters from {}", text.chars().count(), source);
    Ok(text)
}

/// Read a text file
pub fn read_text_from_path(path: &Path) -> Result<String, AppError> {
    let bytes = std::fs::read(path)?;
    text_from_bytes(&bytes, &path.display().to_string())
}

/// Read everything from a reader (stdin for the CLI)
pub fn read_text_from_reader<R: Read>(mut reader: R) -> Result<String, AppError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    text_from_bytes(&bytes, "stdin")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        let text = text_from_bytes("Log in and follow the steps.".as_bytes(), "test").unwrap();
        assert_eq!(text, "Log in and follow the steps.");
    }

    #[test]
    fn test_rejects_nul_bytes() {
        let result = text_from_bytes(b"abc\0def", "test");
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        let result = text_from_bytes(&[0x66, 0x6f, 0xff, 0xfe], "test");
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_reader() {
        let text = read_text_from_reader("hello\nworld".as_bytes()).unwrap();
        assert_eq!(text, "hello\nworld");
    }
}
