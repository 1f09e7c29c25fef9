use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Account role, determines which navigation affordances render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    /// Service provider
    PowerUser,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::PowerUser => "POWER_USER",
            Role::Admin => "ADMIN",
        }
    }

    pub fn is_provider(&self) -> bool {
        matches!(self, Role::PowerUser | Role::Admin)
    }

    pub fn is_customer(&self) -> bool {
        matches!(self, Role::User | Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Role::User),
            "POWER_USER" => Ok(Role::PowerUser),
            "ADMIN" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Credentials of the logged-in user.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

/// Body of `POST /api/auth/login`
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Successful response of `POST /api/auth/login`
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponseDto {
    pub access_token: String,
    pub user_id: i64,
    pub role: Role,
    #[serde(default)]
    pub username: Option<String>,
}

impl LoginResponseDto {
    /// Build the session, falling back to the login email as display name.
    pub fn into_session(self, email: &str) -> Session {
        Session {
            token: self.access_token,
            user_id: self.user_id,
            username: self.username.unwrap_or_else(|| email.to_string()),
            role: self.role,
        }
    }
}
