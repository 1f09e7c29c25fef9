//! Session credentials of the logged-in user.
//!
//! [`SessionContext`] is the only way the client touches the stored session.
//! It reads the session, writes a complete session at login and clears it at
//! logout or when the server answers 401. Individual fields are never updated
//! in place.

pub mod storage;

use std::rc::Rc;

use dioxus_logger::tracing;

use crate::{
    error::SessionError,
    model::session::{Role, Session},
};

pub use storage::{KeyValueStorage, MemoryStorage};

#[cfg(feature = "web")]
pub use storage::BrowserStorage;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const USER_ID_KEY: &str = "user_id";
pub const USERNAME_KEY: &str = "username";
pub const ROLE_KEY: &str = "role";

pub const SESSION_KEYS: [&str; 4] = [ACCESS_TOKEN_KEY, USER_ID_KEY, USERNAME_KEY, ROLE_KEY];

pub struct SessionContext<S> {
    storage: Rc<S>,
}

impl<S> Clone for SessionContext<S> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
}

impl<S: KeyValueStorage> SessionContext<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage: Rc::new(storage),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The stored session, if a complete one exists.
    ///
    /// Partially written or unparseable entries count as logged out.
    pub fn current(&self) -> Option<Session> {
        match self.load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Failed to read session: {}", e);
                None
            }
        }
    }

    pub fn token(&self) -> Option<String> {
        self.current().map(|session| session.token)
    }

    pub fn role(&self) -> Option<Role> {
        self.current().map(|session| session.role)
    }

    /// Replace whatever is stored with `session`.
    pub fn begin(&self, session: &Session) -> Result<(), SessionError> {
        self.clear();

        self.storage.set(USER_ID_KEY, &session.user_id.to_string())?;
        self.storage.set(USERNAME_KEY, &session.username)?;
        self.storage.set(ROLE_KEY, session.role.as_str())?;
        // Written last so a failed write above never leaves a usable token behind.
        self.storage.set(ACCESS_TOKEN_KEY, &session.token)?;

        Ok(())
    }

    /// Remove every session key.
    pub fn clear(&self) {
        for key in SESSION_KEYS {
            if let Err(e) = self.storage.remove(key) {
                tracing::error!("Failed to clear session key {}: {}", key, e);
            }
        }
    }

    fn load(&self) -> Result<Option<Session>, SessionError> {
        let Some(token) = self.storage.get(ACCESS_TOKEN_KEY)?.filter(|t| !t.is_empty()) else {
            return Ok(None);
        };

        let user_id = self
            .storage
            .get(USER_ID_KEY)?
            .and_then(|id| id.parse::<i64>().ok());
        let role = self
            .storage
            .get(ROLE_KEY)?
            .and_then(|role| role.parse::<Role>().ok());
        let username = self.storage.get(USERNAME_KEY)?.unwrap_or_default();

        match (user_id, role) {
            (Some(user_id), Some(role)) => Ok(Some(Session {
                token,
                user_id,
                username,
                role,
            })),
            _ => Ok(None),
        }
    }
}
