//! Status messages for operation feedback.

use std::fmt;

/// Severity of an [`OperationStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Failure,
}

/// A one-line confirmation or problem report.
pub struct OperationStatus {
    pub message: String,
    pub severity: Severity,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self::with(Severity::Success, message)
    }

    /// A problem the command recovered from.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::with(Severity::Warning, message)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::with(Severity::Failure, message)
    }

    fn with(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Success => "Success:",
            Severity::Warning => "Warning:",
            Severity::Failure => "Error:",
        };
        writeln!(f, "{label} {}", self.message)
    }
}
