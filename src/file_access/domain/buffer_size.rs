use crate::shared::FileAccessError;
use std::fmt;

/// Buffer size used when the caller does not pass one (bytes).
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// NewType wrapper for the read buffer size with validation
///
/// One byte of the buffer is reserved, so a single read yields at most
/// `get() - 1` bytes. A size of 1 is accepted but can never make progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferSize(usize);

impl BufferSize {
    pub fn new(size: usize) -> Result<Self, FileAccessError> {
        if size < 1 {
            return Err(FileAccessError::InvalidBufferSize { size });
        }
        Ok(Self(size))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Maximum number of bytes a single read may return
    pub fn chunk_limit(self) -> usize {
        self.0 - 1
    }
}

impl Default for BufferSize {
    fn default() -> Self {
        Self(DEFAULT_BUFFER_SIZE)
    }
}

impl TryFrom<usize> for BufferSize {
    type Error = FileAccessError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl fmt::Display for BufferSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes", self.0)
    }
}
