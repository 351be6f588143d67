use crate::file_access::domain::{BufferSize, WriteMode};
use crate::file_access::services::LineChunks;
use crate::ports::outbound::DiagnosticReporter;
use crate::shared::FileAccessError;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// Line iterator over an open file; the file closes when it is dropped
pub type FileLines = LineChunks<BufReader<File>>;

/// TextFileService - reads text files in line chunks and writes strings
///
/// The service holds no per-call state: every operation opens its file,
/// loops, and releases the handle before returning, on every path.
///
/// Two API shapes are offered. The `try_*` methods return
/// `FileAccessError`, including write failures. The plain methods report
/// failures through the injected `DiagnosticReporter` and return `None`
/// (or nothing), and never surface write failures.
///
/// # Type Parameters
/// * `DR` - DiagnosticReporter implementation
pub struct TextFileService<DR> {
    reporter: DR,
    buffer_size: BufferSize,
}

impl<DR: DiagnosticReporter> TextFileService<DR> {
    /// Creates a service using `DEFAULT_BUFFER_SIZE` for the short forms
    pub fn new(reporter: DR) -> Self {
        Self {
            reporter,
            buffer_size: BufferSize::default(),
        }
    }

    /// Replaces the buffer size used by `read_lines` and `read_all`
    pub fn with_buffer_size(mut self, buffer_size: BufferSize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn buffer_size(&self) -> BufferSize {
        self.buffer_size
    }

    // Read

    /// Opens `path` and returns its line chunks as an iterator
    ///
    /// # Errors
    /// `InvalidBufferSize` if `buffer_size` is 0 (the file is not touched),
    /// `OpenFile` if the file cannot be opened.
    pub fn try_open_lines(
        &self,
        path: impl AsRef<Path>,
        buffer_size: usize,
    ) -> Result<FileLines, FileAccessError> {
        let buffer_size = BufferSize::new(buffer_size)?;
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| FileAccessError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(LineChunks::new(BufReader::new(file), buffer_size))
    }

    /// Calls `on_line` for each line chunk of `path`, in file order
    pub fn try_read_lines<F>(
        &self,
        path: impl AsRef<Path>,
        buffer_size: usize,
        mut on_line: F,
    ) -> Result<(), FileAccessError>
    where
        F: FnMut(&str),
    {
        for line in self.try_open_lines(path, buffer_size)? {
            on_line(&line);
        }
        Ok(())
    }

    /// Concatenates every line chunk of `path`
    pub fn try_read_all(
        &self,
        path: impl AsRef<Path>,
        buffer_size: usize,
    ) -> Result<String, FileAccessError> {
        Ok(self.try_open_lines(path, buffer_size)?.collect())
    }

    pub fn read_lines<F>(&self, path: impl AsRef<Path>, on_line: F)
    where
        F: FnMut(&str),
    {
        self.read_lines_with_buffer(path, self.buffer_size.get(), on_line)
    }

    /// Calls `on_line` for each line chunk; failures go to the reporter
    ///
    /// Nothing is called when the buffer size is 0 or the file cannot be
    /// opened. A line longer than `buffer_size - 1` bytes arrives in pieces.
    pub fn read_lines_with_buffer<F>(&self, path: impl AsRef<Path>, buffer_size: usize, on_line: F)
    where
        F: FnMut(&str),
    {
        if let Err(err) = self.try_read_lines(path, buffer_size, on_line) {
            self.report(&err);
        }
    }

    pub fn read_all(&self, path: impl AsRef<Path>) -> Option<String> {
        self.read_all_with_buffer(path, self.buffer_size.get())
    }

    /// Returns the whole text of `path`, or `None` after reporting a failure
    pub fn read_all_with_buffer(
        &self,
        path: impl AsRef<Path>,
        buffer_size: usize,
    ) -> Option<String> {
        self.try_read_all(path, buffer_size)
            .map_err(|err| self.report(&err))
            .ok()
    }

    // Write

    /// Replaces the content of `path` (creating it) with `content`
    ///
    /// # Errors
    /// `OpenFile` if the file cannot be opened, `Write` if writing fails.
    pub fn try_write(&self, path: impl AsRef<Path>, content: &str) -> Result<(), FileAccessError> {
        Self::write_with_mode(path.as_ref(), content, WriteMode::Truncate)
    }

    /// Appends `content` to `path`, creating the file if needed
    pub fn try_append_to(
        &self,
        path: impl AsRef<Path>,
        content: &str,
    ) -> Result<(), FileAccessError> {
        Self::write_with_mode(path.as_ref(), content, WriteMode::Append)
    }

    /// Truncating write; only an open failure is reported
    pub fn write(&self, path: impl AsRef<Path>, content: &str) {
        self.write_unchecked(path.as_ref(), content, WriteMode::Truncate)
    }

    /// Appending write; only an open failure is reported
    pub fn append_to(&self, path: impl AsRef<Path>, content: &str) {
        self.write_unchecked(path.as_ref(), content, WriteMode::Append)
    }

    fn open_for_write(path: &Path, mode: WriteMode) -> Result<File, FileAccessError> {
        mode.open_options()
            .open(path)
            .map_err(|source| FileAccessError::OpenFile {
                path: path.to_path_buf(),
                source,
            })
    }

    fn write_with_mode(path: &Path, content: &str, mode: WriteMode) -> Result<(), FileAccessError> {
        let mut file = Self::open_for_write(path, mode)?;
        file.write_all(content.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| FileAccessError::Write {
                path: path.to_path_buf(),
                source,
            })
    }

    fn write_unchecked(&self, path: &Path, content: &str, mode: WriteMode) {
        match Self::open_for_write(path, mode) {
            Ok(mut file) => {
                // Write errors are intentionally dropped; use try_write to see them
                let _ = file.write_all(content.as_bytes());
            }
            Err(err) => self.report(&err),
        }
    }

    fn report(&self, err: &FileAccessError) {
        self.reporter.report_error(&err.to_string());
    }
}
