/// Mock implementations for testing
mod mock_diagnostic_reporter;
mod mock_directory_source;

pub use mock_diagnostic_reporter::MockDiagnosticReporter;
pub use mock_directory_source::MockDirectorySource;
