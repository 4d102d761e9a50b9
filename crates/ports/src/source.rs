// crates/ports/src/source.rs
use code_counter_shared_kernel::Result;

/// Supplier of one raw text blob per submission.
pub trait TextSource: Send + Sync {
    fn read(&self) -> Result<String>;
    fn describe(&self) -> String;
}
