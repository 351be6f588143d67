use crate::ports::outbound::{DiagnosticReporter, DirectoryHandle, DirectorySource};
use crate::shared::FileAccessError;
use std::path::Path;

/// DirectoryLister - enumerates the entry names of a directory
///
/// Names come out in the order the directory stream yields them (no
/// sorting, no filtering of `.`/`..`, no existence checks). Entries whose
/// name is not valid UTF-8 are skipped. The handle is released before
/// every method returns.
///
/// # Type Parameters
/// * `DS` - DirectorySource implementation
/// * `DR` - DiagnosticReporter implementation
pub struct DirectoryLister<DS, DR> {
    source: DS,
    reporter: DR,
}

impl<DS, DR> DirectoryLister<DS, DR>
where
    DS: DirectorySource,
    DR: DiagnosticReporter,
{
    /// Creates a new DirectoryLister with injected dependencies
    pub fn new(source: DS, reporter: DR) -> Self {
        Self { source, reporter }
    }

    /// Calls `on_entry` with every decodable entry name of `path`
    ///
    /// # Errors
    /// `OpenDirectory` if `path` cannot be opened as a directory; `on_entry`
    /// is not called in that case.
    pub fn try_list_entries_with<F>(
        &self,
        path: impl AsRef<Path>,
        mut on_entry: F,
    ) -> Result<(), FileAccessError>
    where
        F: FnMut(&str),
    {
        let path = path.as_ref();
        let mut handle = self
            .source
            .open(path)
            .map_err(|source| FileAccessError::OpenDirectory {
                path: path.to_path_buf(),
                source,
            })?;

        while let Some(raw) = handle.next_entry() {
            if let Some(name) = raw.to_name() {
                on_entry(&name);
            }
        }
        Ok(())
    }

    /// Collects every decodable entry name of `path`, in stream order
    pub fn try_list_entries(&self, path: impl AsRef<Path>) -> Result<Vec<String>, FileAccessError> {
        let mut names = Vec::new();
        self.try_list_entries_with(path, |name| names.push(name.to_string()))?;
        Ok(names)
    }

    /// Callback form; an open failure is reported and nothing is called
    pub fn list_entries_with<F>(&self, path: impl AsRef<Path>, on_entry: F)
    where
        F: FnMut(&str),
    {
        if let Err(err) = self.try_list_entries_with(path, on_entry) {
            self.reporter.report_error(&err.to_string());
        }
    }

    /// Collecting form; `None` after reporting an open failure
    pub fn list_entries(&self, path: impl AsRef<Path>) -> Option<Vec<String>> {
        self.try_list_entries(path)
            .map_err(|err| self.reporter.report_error(&err.to_string()))
            .ok()
    }
}
