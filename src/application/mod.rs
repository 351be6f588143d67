/// Application layer - Use cases
///
/// This layer contains the file and directory services that orchestrate
/// the domain line loop and the infrastructure ports.
pub mod use_cases;
