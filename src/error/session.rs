use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// The browser refused access to storage (private mode, disabled cookies).
    #[error("Session storage is unavailable")]
    Unavailable,
    #[error("Failed to access session storage key {key}: {reason}")]
    Access { key: String, reason: String },
}
