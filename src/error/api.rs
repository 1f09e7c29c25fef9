use thiserror::Error;

/// Shown when a rejection carries no readable reason.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";
/// Shown when the server cannot be reached at all.
pub const CONNECTIVITY_MESSAGE: &str = "Could not connect to the server.";
/// Shown after a 401 while the browser is sent to the login view.
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// The request never produced an HTTP response.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Outcome of a failed request through the API gateway.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The server answered 401. The session has already been cleared and the
    /// browser sent to the login view.
    #[error("Session expired")]
    SessionExpired,
    /// The server answered with a non-2xx status other than 401.
    #[error("Request failed with status {status}: {message}")]
    Rejected { status: u16, message: String },
    /// No response was received.
    #[error("Failed to reach server: {0}")]
    Connectivity(String),
    /// A 2xx response whose body could not be understood.
    #[error("Failed to parse response: {0}")]
    MalformedResponse(String),
    /// The request body could not be serialized; never sent.
    #[error("Failed to encode request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// Text suitable for a notification.
    ///
    /// Server-provided reasons are passed through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::SessionExpired => SESSION_EXPIRED_MESSAGE.to_string(),
            ApiError::Rejected { message, .. } => message.clone(),
            ApiError::Connectivity(_) => CONNECTIVITY_MESSAGE.to_string(),
            ApiError::MalformedResponse(_) | ApiError::Encode(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Connectivity(err.0)
    }
}
