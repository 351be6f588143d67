//! Free-function forms of the services, wired to the stderr reporter.
//!
//! These are what most callers want: open, loop, close, and print a
//! perror-style diagnostic on failure.

use crate::adapters::outbound::console::StderrDiagnosticReporter;
use crate::adapters::outbound::filesystem::StdDirectorySource;
use crate::application::use_cases::{DirectoryLister, TextFileService};
use std::path::Path;

fn text_files() -> TextFileService<StderrDiagnosticReporter> {
    TextFileService::new(StderrDiagnosticReporter::new())
}

fn directories() -> DirectoryLister<StdDirectorySource, StderrDiagnosticReporter> {
    DirectoryLister::new(StdDirectorySource::new(), StderrDiagnosticReporter::new())
}

/// Calls `on_line` for each line of `path` using `DEFAULT_BUFFER_SIZE`
pub fn read_lines<F: FnMut(&str)>(path: impl AsRef<Path>, on_line: F) {
    text_files().read_lines(path, on_line)
}

pub fn read_lines_with_buffer<F: FnMut(&str)>(
    path: impl AsRef<Path>,
    buffer_size: usize,
    on_line: F,
) {
    text_files().read_lines_with_buffer(path, buffer_size, on_line)
}

/// Whole content of `path`, or `None` if it could not be opened
pub fn read_all(path: impl AsRef<Path>) -> Option<String> {
    text_files().read_all(path)
}

pub fn read_all_with_buffer(path: impl AsRef<Path>, buffer_size: usize) -> Option<String> {
    text_files().read_all_with_buffer(path, buffer_size)
}

pub fn write(path: impl AsRef<Path>, content: &str) {
    text_files().write(path, content)
}

pub fn append_to(path: impl AsRef<Path>, content: &str) {
    text_files().append_to(path, content)
}

pub fn list_entries_with<F: FnMut(&str)>(path: impl AsRef<Path>, on_entry: F) {
    directories().list_entries_with(path, on_entry)
}

/// Entry names of the directory at `path`, in stream order
pub fn list_entries(path: impl AsRef<Path>) -> Option<Vec<String>> {
    directories().list_entries(path)
}
