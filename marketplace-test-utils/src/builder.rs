//! Declarative setup of a test gateway.
//!
//! Configuration, the stored session and the scripted server responses are
//! collected first and applied in one go by `build()`.

use marketplace::{config::ClientConfig, model::session::Role};
use serde_json::Value;

use crate::{
    constant::{TEST_API_URL, TEST_CSRF_TOKEN},
    error::TestError,
    fixtures::session::mock_session,
    setup::TestSetup,
};

enum Scripted {
    Response(u16, String),
    Failure(String),
}

/// Builder for a [`TestSetup`].
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_session(Role::User)
///     .with_json(200, &json!([]))
///     .build()?;
/// ```
pub struct TestBuilder {
    config: ClientConfig,
    session: Option<Role>,
    responses: Vec<Scripted>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig {
                api_base_url: TEST_API_URL.to_string(),
                ..ClientConfig::default()
            },
            session: None,
            responses: Vec::new(),
        }
    }

    /// Start logged in with the given role.
    pub fn with_session(mut self, role: Role) -> Self {
        self.session = Some(role);
        self
    }

    /// Send the test CSRF token on state-changing requests.
    pub fn with_csrf_token(mut self) -> Self {
        self.config.csrf_token = Some(TEST_CSRF_TOKEN.to_string());
        self
    }

    /// Point the gateway at another server, such as a mockito instance.
    pub fn with_api_url(mut self, url: &str) -> Self {
        self.config.api_base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_response(mut self, status: u16, body: impl Into<String>) -> Self {
        self.responses.push(Scripted::Response(status, body.into()));
        self
    }

    pub fn with_json(self, status: u16, body: &Value) -> Self {
        self.with_response(status, body.to_string())
    }

    /// Script a request that never reaches the server.
    pub fn with_failure(mut self, reason: &str) -> Self {
        self.responses.push(Scripted::Failure(reason.to_string()));
        self
    }

    pub fn build(self) -> Result<TestSetup, TestError> {
        let setup = TestSetup::with_config(self.config);

        if let Some(role) = self.session {
            setup.gateway.session().begin(&mock_session(role))?;
        }

        for scripted in self.responses {
            match scripted {
                Scripted::Response(status, body) => setup.transport().respond(status, body),
                Scripted::Failure(reason) => setup.transport().fail(reason),
            }
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
