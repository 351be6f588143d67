/// File access domain - buffer sizing, entry names and the line loop
///
/// Everything here is free of real I/O handles: the services operate on
/// any `BufRead` and the domain types only validate and convert bytes.
pub mod domain;
pub mod services;
