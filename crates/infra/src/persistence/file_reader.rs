// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// Bytes inspected when deciding whether a file is binary.
pub const SNIFF_LEN: usize = 8 * 1024;

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut reader = Self::open_buffered(path)?;
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Read the whole file as UTF-8 text, refusing binary content.
    pub fn read_text(path: &Path) -> std::io::Result<String> {
        decode_text(Self::read_to_end(path)?)
    }
}

/// Decode `bytes` as UTF-8 text. A NUL byte in the first [`SNIFF_LEN`] bytes
/// marks the content as binary.
pub fn decode_text(bytes: Vec<u8>) -> std::io::Result<String> {
    let head = &bytes[..bytes.len().min(SNIFF_LEN)];
    if head.contains(&0) {
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, "binary content (NUL byte found)"));
    }
    String::from_utf8(bytes).map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))
}
