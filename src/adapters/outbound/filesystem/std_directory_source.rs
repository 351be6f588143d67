use crate::file_access::domain::RawEntryName;
use crate::ports::outbound::{DirectoryHandle, DirectorySource};
use std::fs::{self, ReadDir};
use std::io;
use std::path::Path;

/// StdDirectorySource adapter opening directories with `std::fs::read_dir`
///
/// The standard library never yields `.` and `..`, and entry order is
/// whatever the operating system returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDirectorySource;

impl StdDirectorySource {
    pub fn new() -> Self {
        Self
    }
}

impl DirectorySource for StdDirectorySource {
    type Handle = StdDirectoryHandle;

    fn open(&self, path: &Path) -> io::Result<Self::Handle> {
        Ok(StdDirectoryHandle {
            entries: fs::read_dir(path)?,
        })
    }
}

/// Open directory stream backed by `ReadDir`
#[derive(Debug)]
pub struct StdDirectoryHandle {
    entries: ReadDir,
}

impl DirectoryHandle for StdDirectoryHandle {
    fn next_entry(&mut self) -> Option<RawEntryName> {
        // A failing entry ends the stream, the same way readdir does
        let entry = self.entries.next()?.ok()?;
        Some(RawEntryName::from_bytes(
            entry.file_name().as_encoded_bytes(),
        ))
    }
}
