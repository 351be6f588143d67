use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish argument mistakes from
/// failures while touching the file system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (open failure, invalid config, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while opening, reading or writing files and directories.
///
/// Decode failures are deliberately absent: invalid text ends a read and
/// skips a directory entry without producing an error value.
#[derive(Debug, Error)]
pub enum FileAccessError {
    #[error("Invalid buffer size: {size} (must be at least 1)")]
    InvalidBufferSize { size: usize },

    #[error("Could not open file {}: {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to open directory {}: {source}", .path.display())]
    OpenDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write to file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileAccessError {
    /// Returns true for failures to open a file or directory.
    pub fn is_open_failure(&self) -> bool {
        matches!(
            self,
            FileAccessError::OpenFile { .. } | FileAccessError::OpenDirectory { .. }
        )
    }
}
