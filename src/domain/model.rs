use serde::{Deserialize, Serialize};

/// Fixed-shape failure object written to stderr.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub status: String,
    pub message: String,
}

impl ErrorPayload {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Structured answer printed with `--json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessReport {
    pub status: String,
    pub data: i128,
    pub calculation: String,
    pub time_taken_ms: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summation {
    pub n: i128,
    pub total: i128,
}

impl Summation {
    pub fn calculation(&self) -> String {
        format!("Sum of 0-{}", self.n - 1)
    }
}
