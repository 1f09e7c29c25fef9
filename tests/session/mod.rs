//! Tests for SessionContext against storage that misbehaves.
//!
//! The browser may refuse storage access entirely; the client must then act
//! logged out and report failures to persist a login.

use marketplace::{
    api::{auth::login, ApiGateway},
    config::ClientConfig,
    error::{AuthError, SessionError},
    model::session::Role,
    session::{KeyValueStorage, MemoryStorage, SessionContext, ACCESS_TOKEN_KEY, ROLE_KEY},
};
use marketplace_test_utils::prelude::*;

/// Storage that refuses every write.
#[derive(Default)]
struct ReadOnlyStorage {
    inner: MemoryStorage,
}

impl KeyValueStorage for ReadOnlyStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), SessionError> {
        Err(SessionError::Unavailable)
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.inner.remove(key)
    }
}

/// Tests that a login whose session cannot be stored fails visibly.
///
/// Expected: Err(AuthError::Session), still logged out
#[tokio::test]
async fn login_fails_when_storage_refuses_writes() {
    let transport = ScriptedTransport::default();
    transport.respond_json(200, &session::login_response(Role::User));
    let gateway = ApiGateway::new(
        transport,
        SessionContext::new(ReadOnlyStorage::default()),
        RecordingNavigator::default(),
        ClientConfig::default(),
    );

    let result = login(&gateway, "jane@example.com", "pw").await;

    assert_eq!(result, Err(AuthError::Session(SessionError::Unavailable)));
    assert_eq!(gateway.session().current(), None);
}

/// Tests that an unparseable role counts as logged out.
///
/// Expected: current() is None, no bearer token attached
#[tokio::test]
async fn unknown_role_is_logged_out() -> Result<(), TestError> {
    let test = TestBuilder::new().with_session(Role::User).build()?;
    test.storage().set(ROLE_KEY, "SUPERUSER")?;

    assert_eq!(test.gateway.session().current(), None);
    assert_eq!(test.gateway.session().token(), None);
    assert!(test.storage().contains(ACCESS_TOKEN_KEY));

    Ok(())
}
