use alloc::string::String;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Ok,
    Warn,
}

impl Severity {
    pub const fn class(self) -> &'static str {
        use Severity::*;
        match self {
            Info => "info",
            Ok => "ok",
            Warn => "warn",
        }
    }
}

/// The single status line; a new one replaces whatever was shown before.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub text: String,
    pub severity: Severity,
}

impl Status {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    pub fn class_name(&self) -> String {
        alloc::format!("status {}", self.severity.class())
    }
}
