// crates/infra/src/persistence/file_sink.rs
use std::path::{Path, PathBuf};

use code_counter_ports::CleanedSink;
use code_counter_shared_kernel::{InfrastructureError, Result};

use super::{FileReader, FileWriter};

/// Default sink location, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Cleaned lines persisted as a text file, one line per row.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    atomic: bool,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), atomic: false }
    }

    /// Write through a temp file and rename, so readers never see a partial file.
    #[must_use]
    pub fn atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSink {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT)
    }
}

impl CleanedSink for FileSink {
    fn write(&self, lines: &[String]) -> Result<()> {
        let written = if self.atomic {
            FileWriter::atomic_write_lines(&self.path, lines)
        } else {
            FileWriter::write_lines(&self.path, lines)
        };
        written.map_err(|source| InfrastructureError::SinkWrite { path: self.path.clone(), source })?;
        log::debug!("wrote {} lines to {}", lines.len(), self.path.display());
        Ok(())
    }

    fn read_back(&self) -> Result<String> {
        let mut text = FileReader::read_text(&self.path)
            .map_err(|source| InfrastructureError::SinkRead { path: self.path.clone(), source })?;
        // every written line carries a terminator; the display text does not
        if text.ends_with('\n') {
            text.pop();
        }
        Ok(text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
