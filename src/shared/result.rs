/// Type alias for Result with anyhow::Error as the error type.
/// Used by the CLI and configuration layers; the library operations
/// return `FileAccessError` directly so callers can match on it.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
