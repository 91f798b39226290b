use std::fmt;

use serde::{Deserialize, Serialize};

pub const PASS_MARKER: &str = "👍";
pub const FAIL_MARKER: &str = "👎";

/// Renders a single check as `"<message> <marker>"`.
pub fn expect(assertion: bool, message: &str) -> String {
    Expectation::check(assertion, message).to_string()
}

/// One named boolean check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expectation {
    pub message: String,
    pub passed: bool,
}

impl Expectation {
    pub fn check(assertion: bool, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            passed: assertion,
        }
    }

    pub fn marker(&self) -> &'static str {
        if self.passed {
            PASS_MARKER
        } else {
            FAIL_MARKER
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.message, self.marker())
    }
}
