/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (directory streams, stderr).
pub mod diagnostic_reporter;
pub mod directory_source;

pub use diagnostic_reporter::DiagnosticReporter;
pub use directory_source::{DirectoryHandle, DirectorySource};
