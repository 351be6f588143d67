use crate::ports::outbound::DiagnosticReporter;
use owo_colors::OwoColorize;

/// StderrDiagnosticReporter adapter for reporting diagnostics to stderr
///
/// This adapter implements the DiagnosticReporter port, writing messages
/// to stderr so they never mix with file content printed on stdout.
/// Colouring uses owo-colors and can be switched off.
#[derive(Debug, Clone, Copy)]
pub struct StderrDiagnosticReporter {
    color: bool,
}

impl StderrDiagnosticReporter {
    pub fn new() -> Self {
        Self { color: true }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn format_error(&self, message: &str) -> String {
        if self.color {
            format!("❌ {}", message.red())
        } else {
            format!("❌ {}", message)
        }
    }

    fn format_warning(&self, message: &str) -> String {
        if self.color {
            format!("⚠️  Warning: {}", message.yellow())
        } else {
            format!("⚠️  Warning: {}", message)
        }
    }
}

impl Default for StderrDiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticReporter for StderrDiagnosticReporter {
    fn report_error(&self, message: &str) {
        eprintln!("{}", self.format_error(message));
    }

    fn report_warning(&self, message: &str) {
        eprintln!("{}", self.format_warning(message));
    }
}
