/// DiagnosticReporter port for out-of-band failure messages
///
/// Operations that do not return errors (the callback and collecting forms)
/// describe open failures and invalid arguments through this port instead.
/// The default adapter writes to stderr.
pub trait DiagnosticReporter {
    /// Reports a failure that made an operation return an absent result
    ///
    /// # Arguments
    /// * `message` - Human readable description, including the path and cause
    fn report_error(&self, message: &str);

    /// Reports a non-fatal condition, e.g. an ignored config field
    fn report_warning(&self, message: &str);
}

impl<T: DiagnosticReporter + ?Sized> DiagnosticReporter for &T {
    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn report_warning(&self, message: &str) {
        (**self).report_warning(message)
    }
}
