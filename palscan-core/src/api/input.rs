//! Input abstraction for the detector

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::api::{Error, Result};

/// Text source for a detection run
///
/// Every variant is read fully into memory before scanning.
pub enum Input {
    /// Direct text input
    Text(String),
    /// File path input
    File(PathBuf),
    /// Raw bytes input
    Bytes(Vec<u8>),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from reader
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Resolve the input to UTF-8 text
    pub fn into_text(self) -> Result<String> {
        let bytes = match self {
            Input::Text(text) => return Ok(text),
            Input::Bytes(bytes) => bytes,
            Input::File(path) => std::fs::read(&path).map_err(|e| {
                Error::InvalidInput(format!("failed to read file {}: {}", path.display(), e))
            })?,
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer)?;
                buffer
            }
        };

        String::from_utf8(bytes)
            .map_err(|e| Error::InvalidInput(format!("invalid UTF-8 encoding: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_text_input() {
        let text = Input::from_text("racecar").into_text().unwrap();
        assert_eq!(text, "racecar");
    }

    #[test]
    fn test_bytes_input() {
        let text = Input::from_bytes("été".as_bytes().to_vec())
            .into_text()
            .unwrap();
        assert_eq!(text, "été");
    }

    #[test]
    fn test_invalid_utf8_bytes() {
        let result = Input::from_bytes(vec![0xff, 0xfe, 0x00]).into_text();
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_file_input() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Was it a car or a cat I saw?").unwrap();

        let text = Input::from_file(file.path()).into_text().unwrap();
        assert_eq!(text, "Was it a car or a cat I saw?");
    }

    #[test]
    fn test_missing_file() {
        let err = Input::from_file("/nonexistent/palindromes.txt")
            .into_text()
            .unwrap_err();
        assert!(err.to_string().contains("failed to read file"));
    }

    #[test]
    fn test_reader_input() {
        let reader = Cursor::new(b"step on no pets".to_vec());
        let text = Input::from_reader(reader).into_text().unwrap();
        assert_eq!(text, "step on no pets");
    }

    #[test]
    fn test_debug_hides_contents() {
        let debug = format!("{:?}", Input::from_text("secret"));
        assert!(debug.contains("length"));
        assert!(!debug.contains("secret"));
    }
}
