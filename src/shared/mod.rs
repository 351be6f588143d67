/// Shared kernel - error types and result alias used across layers
pub mod error;
pub mod result;

pub use error::{ExitCode, FileAccessError};
pub use result::Result;
