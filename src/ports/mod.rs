/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist: the application services are
/// called directly by the library API and the CLI.
pub mod outbound;
