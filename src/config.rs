use std::time::Duration;

use crate::{error::ConfigError, notification::NotificationTiming};

pub const NOTIFY_MS_VAR: &str = "MARKETPLACE_NOTIFY_MS";

/// Runtime settings of the client.
///
/// Values are baked in at build time from environment variables, the CSRF
/// token is added at startup from the page's `<meta name="csrf-token">`.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Prefix for every endpoint, empty for same-origin requests.
    pub api_base_url: String,
    /// Where the browser is sent after a 401.
    pub login_path: String,
    pub csrf_token: Option<String>,
    pub notification: NotificationTiming,
    /// Delay between a successful booking action and the list refresh.
    pub refresh_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            login_path: "/login".to_string(),
            csrf_token: None,
            notification: NotificationTiming::default(),
            refresh_delay: Duration::from_secs(1),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(option_env!("MARKETPLACE_API_URL"), option_env!("MARKETPLACE_NOTIFY_MS"))
    }

    pub fn from_vars(api_url: Option<&str>, notify_ms: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = api_url {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(ms) = notify_ms {
            let ms = ms
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: NOTIFY_MS_VAR.to_string(),
                    reason: e.to_string(),
                })?;
            config.notification.display = Duration::from_millis(ms);
        }

        Ok(config)
    }

    pub fn with_csrf_token(mut self, token: Option<String>) -> Self {
        self.csrf_token = token.filter(|t| !t.is_empty());
        self
    }

    /// Absolute or same-origin URL for an endpoint path.
    pub fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_string();
        }

        format!("{}{}", self.api_base_url, endpoint)
    }
}
