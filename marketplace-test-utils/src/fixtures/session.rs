use marketplace::model::session::{Role, Session};
use serde_json::{json, Value};

use crate::constant::{TEST_ACCESS_TOKEN, TEST_USERNAME, TEST_USER_ID};

/// Create a complete session for the given role with default test values.
pub fn mock_session(role: Role) -> Session {
    Session {
        token: TEST_ACCESS_TOKEN.to_string(),
        user_id: TEST_USER_ID,
        username: TEST_USERNAME.to_string(),
        role,
    }
}

/// Body of a successful `POST /api/auth/login` for the given role.
pub fn login_response(role: Role) -> Value {
    json!({
        "access_token": TEST_ACCESS_TOKEN,
        "user_id": TEST_USER_ID,
        "role": role.as_str(),
        "username": TEST_USERNAME,
    })
}
