// crates/infra/src/source/stdin_source.rs
use std::io::Read;

use code_counter_ports::TextSource;
use code_counter_shared_kernel::{InfrastructureError, Result};

use crate::persistence::file_reader::decode_text;

/// Raw text read from standard input until EOF.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl TextSource for StdinSource {
    fn read(&self) -> Result<String> {
        let mut buf = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .and_then(|_| decode_text(buf))
            .map_err(|source| InfrastructureError::SourceRead { origin: self.describe(), source }.into())
    }

    fn describe(&self) -> String {
        "<stdin>".to_string()
    }
}
