use plainfs::prelude::*;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock DirectorySource serving in-memory raw entries per path
///
/// Paths without registered entries fail to open with `NotFound`.
/// Open handles are counted so tests can check they are released.
#[derive(Default, Clone)]
pub struct MockDirectorySource {
    directories: HashMap<PathBuf, Vec<RawEntryName>>,
    open_handles: Arc<AtomicUsize>,
}

impl MockDirectorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(mut self, path: &str, names: &[&[u8]]) -> Self {
        let entries = names.iter().map(|n| RawEntryName::from_bytes(n)).collect();
        self.directories.insert(PathBuf::from(path), entries);
        self
    }

    pub fn with_raw_entries(mut self, path: &str, entries: Vec<RawEntryName>) -> Self {
        self.directories.insert(PathBuf::from(path), entries);
        self
    }

    pub fn open_handles(&self) -> usize {
        self.open_handles.load(Ordering::SeqCst)
    }
}

pub struct MockDirectoryHandle {
    entries: std::vec::IntoIter<RawEntryName>,
    open_handles: Arc<AtomicUsize>,
}

impl DirectorySource for MockDirectorySource {
    type Handle = MockDirectoryHandle;

    fn open(&self, path: &Path) -> io::Result<MockDirectoryHandle> {
        let entries = self
            .directories
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "No such file or directory"))?;
        self.open_handles.fetch_add(1, Ordering::SeqCst);
        Ok(MockDirectoryHandle {
            entries: entries.into_iter(),
            open_handles: Arc::clone(&self.open_handles),
        })
    }
}

impl DirectoryHandle for MockDirectoryHandle {
    fn next_entry(&mut self) -> Option<RawEntryName> {
        self.entries.next()
    }
}

impl Drop for MockDirectoryHandle {
    fn drop(&mut self) {
        self.open_handles.fetch_sub(1, Ordering::SeqCst);
    }
}
