/// Filesystem adapters backed by `std::fs`
mod std_directory_source;

pub use std_directory_source::{StdDirectoryHandle, StdDirectorySource};
