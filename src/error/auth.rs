use thiserror::Error;

use crate::error::{ApiError, SessionError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),
    /// Logged in, but the session could not be persisted.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl AuthError {
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Api(err) => err.user_message(),
            AuthError::Session(_) => {
                "Could not save your session. Check that site storage is enabled.".to_string()
            }
        }
    }
}
