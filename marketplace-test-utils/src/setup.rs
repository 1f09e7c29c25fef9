use marketplace::{
    api::ApiGateway,
    config::ClientConfig,
    session::{MemoryStorage, SessionContext},
};

use crate::{navigator::RecordingNavigator, transport::ScriptedTransport};

/// Gateway wired to in-memory test doubles.
pub type TestGateway = ApiGateway<ScriptedTransport, MemoryStorage, RecordingNavigator>;

pub struct TestSetup {
    pub gateway: TestGateway,
}

impl TestSetup {
    pub fn with_config(config: ClientConfig) -> Self {
        let gateway = ApiGateway::new(
            ScriptedTransport::default(),
            SessionContext::new(MemoryStorage::default()),
            RecordingNavigator::default(),
            config,
        );

        Self { gateway }
    }

    pub fn transport(&self) -> &ScriptedTransport {
        self.gateway.transport()
    }

    pub fn navigator(&self) -> &RecordingNavigator {
        self.gateway.navigator()
    }

    pub fn storage(&self) -> &MemoryStorage {
        self.gateway.session().storage()
    }

    /// Full URL the gateway uses for an endpoint.
    pub fn url(&self, endpoint: &str) -> String {
        self.gateway.config().url(endpoint)
    }
}
