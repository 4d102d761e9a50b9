pub mod file_source;
pub mod stdin_source;

pub use file_source::FileSource;
pub use stdin_source::StdinSource;
