//! Diagnostic warnings
//!
//! The service never fails; misuse is reported through a warning sink instead.

/// Receives non-fatal diagnostic warnings from the notification service
pub trait DiagnosticSink {
    fn warn(&mut self, message: &str);
}

/// Forwards warnings to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&mut self, message: &str) {
        log::warn!("{}", message);
    }
}

/// Keeps every warning in memory, for hosts that surface them elsewhere
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    warnings: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl DiagnosticSink for RecordingSink {
    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
