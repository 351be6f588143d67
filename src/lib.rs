//! plainfs - line-buffered text files and directory listings
//!
//! This library reads text files in line chunks (by callback, iterator or
//! whole string), writes and appends strings, and enumerates directory
//! entries. Every operation opens its resource, loops, and releases it
//! before returning; nothing is cached between calls.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`file_access`): buffer sizing, entry names, the line loop
//! - **Application Layer** (`application`): `TextFileService` and `DirectoryLister`
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error types
//!
//! The crate root re-exports free functions wired to the stderr reporter.
//!
//! # Example
//!
//! ```no_run
//! use plainfs::prelude::*;
//!
//! plainfs::write("HelloWorld.txt", "Hello\nWorld!");
//!
//! if let Some(text) = plainfs::read_all("HelloWorld.txt") {
//!     print!("{}", text);
//! }
//!
//! let service = TextFileService::new(StderrDiagnosticReporter::new());
//! service.read_lines("HelloWorld.txt", |line| print!("{}", line));
//!
//! let lister = DirectoryLister::new(StdDirectorySource::new(), StderrDiagnosticReporter::new());
//! for name in lister.list_entries(".").unwrap_or_default() {
//!     println!("{}", name);
//! }
//! ```

pub mod adapters;
pub mod application;
pub mod file_access;
pub mod ports;
pub mod shared;
mod shortcuts;

pub use shortcuts::{
    append_to, list_entries, list_entries_with, read_all, read_all_with_buffer, read_lines,
    read_lines_with_buffer, write,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrDiagnosticReporter;
    pub use crate::adapters::outbound::filesystem::{StdDirectoryHandle, StdDirectorySource};
    pub use crate::application::use_cases::{DirectoryLister, FileLines, TextFileService};
    pub use crate::file_access::domain::{
        BufferSize, RawEntryName, WriteMode, DEFAULT_BUFFER_SIZE, ENTRY_NAME_CAPACITY,
    };
    pub use crate::file_access::services::LineChunks;
    pub use crate::ports::outbound::{DiagnosticReporter, DirectoryHandle, DirectorySource};
    pub use crate::shared::{ExitCode, FileAccessError, Result};
}
