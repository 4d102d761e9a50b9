// crates/ports/src/sink.rs
use code_counter_shared_kernel::Result;

/// Persisted target for cleaned lines.
///
/// `read_back` after a successful `write` must return exactly the lines
/// joined by `\n`, with no trailing terminator.
pub trait CleanedSink: Send + Sync {
    fn write(&self, lines: &[String]) -> Result<()>;
    fn read_back(&self) -> Result<String>;
    /// Human-readable location for log lines.
    fn describe(&self) -> String;
}
