//! Tests for login and logout.
//!
//! This module verifies that a successful login persists a complete session,
//! that wrong credentials are an ordinary rejection rather than an expired
//! session, and that logout clears the session and returns to the landing page.

use marketplace::{
    api::auth::{login, logout, LOGIN_ENDPOINT, LOGOUT_REDIRECT},
    error::{ApiError, AuthError},
    model::session::Role,
    session::{KeyValueStorage, ACCESS_TOKEN_KEY, ROLE_KEY, SESSION_KEYS, USERNAME_KEY},
};
use marketplace_test_utils::{constant::TEST_ACCESS_TOKEN, prelude::*};
use serde_json::{json, Value};

/// Tests logging in with valid credentials.
///
/// Verifies that the credentials are posted without a bearer token and that
/// all session keys are written.
///
/// Expected: Ok with the session, storage holds every key
#[tokio::test]
async fn stores_session_on_success() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json(200, &session::login_response(Role::PowerUser))
        .build()?;

    let session = login(&test.gateway, "jane@example.com", "hunter2").await?;

    assert_eq!(session.role, Role::PowerUser);
    assert_eq!(session.token, TEST_ACCESS_TOKEN);
    for key in SESSION_KEYS {
        assert!(test.storage().contains(key), "{} missing", key);
    }
    assert_eq!(test.gateway.session().current(), Some(session));

    let request = test.transport().last_request().unwrap();
    assert_eq!(request.url, test.url(LOGIN_ENDPOINT));
    assert_eq!(request.header("Authorization"), None);
    let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(
        body,
        json!({ "email": "jane@example.com", "password": "hunter2" })
    );

    Ok(())
}

/// Tests that wrong credentials do not look like an expired session.
///
/// Expected: Err(Rejected) with the server message, no redirect
#[tokio::test]
async fn wrong_credentials_are_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json(401, &json!({ "error": "Invalid email or password" }))
        .build()?;

    let result = login(&test.gateway, "jane@example.com", "wrong").await;

    assert_eq!(
        result,
        Err(AuthError::Api(ApiError::Rejected {
            status: 401,
            message: "Invalid email or password".to_string(),
        }))
    );
    assert!(test.navigator().redirects().is_empty());
    assert!(test.storage().is_empty());

    Ok(())
}

/// Tests that a refused login leaves no earlier session behind.
///
/// Verifies that even when a 401 arrives on the login endpoint, where it is
/// reported as a rejection rather than an expiry, the previously stored
/// session keys are gone.
///
/// Expected: Err(Rejected), every session key removed, no redirect
#[tokio::test]
async fn refused_login_drops_previous_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session(Role::Admin)
        .with_json(401, &json!({ "error": "Token expired" }))
        .build()?;

    let result = login(&test.gateway, "jane@example.com", "wrong").await;

    assert!(matches!(
        result,
        Err(AuthError::Api(ApiError::Rejected { status: 401, .. }))
    ));
    for key in SESSION_KEYS {
        assert!(!test.storage().contains(key), "{} left behind", key);
    }
    assert!(test.navigator().redirects().is_empty());

    Ok(())
}

/// Tests that logging in replaces a previous session entirely.
///
/// Expected: role and username of the new session only
#[tokio::test]
async fn replaces_previous_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session(Role::Admin)
        .with_json(
            200,
            &json!({ "access_token": "fresh", "user_id": 8, "role": "USER" }),
        )
        .build()?;

    login(&test.gateway, "sam@example.com", "pw").await?;

    let storage = test.storage();
    assert_eq!(storage.get(ACCESS_TOKEN_KEY)?.as_deref(), Some("fresh"));
    assert_eq!(storage.get(ROLE_KEY)?.as_deref(), Some("USER"));
    assert_eq!(storage.get(USERNAME_KEY)?.as_deref(), Some("sam@example.com"));

    Ok(())
}

/// Tests logging out.
///
/// Expected: every session key removed, redirect to the logout landing page
#[tokio::test]
async fn logout_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_session(Role::User).build()?;

    logout(&test.gateway);

    assert!(test.storage().is_empty());
    assert_eq!(test.gateway.session().current(), None);
    assert_eq!(test.navigator().redirects(), vec![LOGOUT_REDIRECT.to_string()]);
    assert!(test.transport().requests().is_empty());

    Ok(())
}
