//! Nagios plugin severities and their process exit codes.

/// The severity of a check outcome, ordered from healthy to failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
}

impl Severity {
    /// The severity a reported status code maps to.
    ///
    /// Codes are matched case-insensitively. Anything that is not `OK` or
    /// `WARNING` counts as [`Severity::Critical`].
    #[must_use]
    pub fn from_status_code(code: &str) -> Self {
        match code.to_uppercase().as_str() {
            "OK" => Self::Ok,
            "WARNING" => Self::Warning,
            _ => Self::Critical,
        }
    }

    /// The process exit code monitoring engines read for this severity.
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
        }
    }
}
