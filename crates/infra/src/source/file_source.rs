// crates/infra/src/source/file_source.rs
use std::path::{Path, PathBuf};

use code_counter_ports::TextSource;
use code_counter_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

/// Raw text loaded from a file on every submit.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for FileSource {
    fn read(&self) -> Result<String> {
        let text = FileReader::read_text(&self.path)
            .map_err(|source| InfrastructureError::SourceRead { origin: self.describe(), source })?;
        log::debug!("read {} bytes from {}", text.len(), self.path.display());
        Ok(text)
    }

    fn describe(&self) -> String {
        format!("'{}'", self.path.display())
    }
}
