/// Console adapters for stderr diagnostics
mod diagnostic_reporter;

pub use diagnostic_reporter::StderrDiagnosticReporter;
