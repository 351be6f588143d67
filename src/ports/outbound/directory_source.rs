use crate::file_access::domain::RawEntryName;
use std::io;
use std::path::Path;

/// DirectorySource port for opening directory streams
///
/// This port hides the platform directory API. Implementations decide which
/// entries a stream yields (including `.` and `..`) and in which order.
pub trait DirectorySource {
    type Handle: DirectoryHandle;

    /// Opens the directory at `path`
    ///
    /// # Errors
    /// Returns the underlying I/O error if the path is missing, is not a
    /// directory, or cannot be read.
    fn open(&self, path: &Path) -> io::Result<Self::Handle>;
}

/// An open directory stream, exclusively owned by the call that opened it
///
/// The stream is closed when the handle is dropped.
pub trait DirectoryHandle {
    /// Fetches the next raw entry, or `None` once the stream is exhausted
    fn next_entry(&mut self) -> Option<RawEntryName>;
}
