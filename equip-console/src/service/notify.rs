use std::time::Duration;

use strum::AsRefStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum Severity {
    Success,
    Error,
}

/// Transient toast shown after a save attempt. Dismissed explicitly or after
/// [`Notification::AUTO_DISMISS`].
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub const AUTO_DISMISS: Duration = Duration::from_secs(6);

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}
