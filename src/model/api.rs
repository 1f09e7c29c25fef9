use serde::{Deserialize, Serialize};

/// Body returned by the backend when a request is refused.
///
/// Endpoints are inconsistent about the field they use, so both are optional
/// and [`ErrorDto::reason`] picks whichever is present.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ErrorDto {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorDto {
    /// The server-provided explanation, preferring `error` over `message`.
    pub fn reason(self) -> Option<String> {
        self.error
            .filter(|e| !e.is_empty())
            .or(self.message.filter(|m| !m.is_empty()))
    }
}

/// Response of `GET /api/health`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}

impl HealthDto {
    pub fn is_healthy(&self) -> bool {
        matches!(self.status.as_str(), "healthy" | "up")
    }
}
