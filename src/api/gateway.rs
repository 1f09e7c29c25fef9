use std::rc::Rc;

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    api::{
        navigator::Navigator,
        transport::{HttpRequest, HttpResponse, Method, Transport},
    },
    config::ClientConfig,
    error::{api::GENERIC_FAILURE_MESSAGE, ApiError},
    model::api::ErrorDto,
    session::{KeyValueStorage, SessionContext},
};

pub const CSRF_HEADER: &str = "X-CSRF-Token";

/// How a single request should be sent.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    /// Attach the bearer token and treat 401 as an expired session.
    pub authenticated: bool,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            authenticated: true,
        }
    }

    pub fn get() -> Self {
        Self::new(Method::Get)
    }

    pub fn post() -> Self {
        Self::new(Method::Post)
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(body);
        Ok(self)
    }

    /// For requests made without a session, such as logging in. A 401 is
    /// then an ordinary rejection instead of an expired session.
    pub fn anonymous(mut self) -> Self {
        self.authenticated = false;
        self
    }
}

/// Single exit point for every request the client makes.
///
/// Attaches credentials, handles expired sessions uniformly and turns every
/// failure into an [`ApiError`].
pub struct ApiGateway<T, S, N> {
    transport: Rc<T>,
    session: SessionContext<S>,
    navigator: Rc<N>,
    config: Rc<ClientConfig>,
}

impl<T, S, N> Clone for ApiGateway<T, S, N> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            session: self.session.clone(),
            navigator: self.navigator.clone(),
            config: self.config.clone(),
        }
    }
}

impl<T, S, N> ApiGateway<T, S, N>
where
    T: Transport,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(
        transport: T,
        session: SessionContext<S>,
        navigator: N,
        config: ClientConfig,
    ) -> Self {
        Self {
            transport: Rc::new(transport),
            session,
            navigator: Rc::new(navigator),
            config: Rc::new(config),
        }
    }

    pub fn session(&self) -> &SessionContext<S> {
        &self.session
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Send a request and return its parsed JSON body.
    ///
    /// An empty successful body is returned as `Value::Null`.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let authenticated = options.authenticated;
        let request = self.build_request(endpoint, options);
        let method = request.method;
        let url = request.url.clone();

        tracing::debug!("{} {}", method.as_str(), url);

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!("{} {} failed without a response: {}", method.as_str(), url, e);
            ApiError::from(e)
        })?;

        if response.status == 401 && authenticated {
            tracing::info!("Session expired on {} {}, redirecting to login", method.as_str(), url);
            self.session.clear();
            self.navigator.redirect(&self.config.login_path);
            return Err(ApiError::SessionExpired);
        }

        if !response.is_success() {
            let err = rejection(&response);
            tracing::warn!("{} {} rejected: {}", method.as_str(), url, err);
            return Err(err);
        }

        parse_body(&response.body)
    }

    /// Send a request and deserialize its body into `R`.
    pub async fn fetch<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        let value = self.request(endpoint, options).await?;

        serde_json::from_value(value).map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    pub async fn get_json<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        self.fetch(endpoint, RequestOptions::get()).await
    }

    fn build_request(&self, endpoint: &str, options: RequestOptions) -> HttpRequest {
        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];

        if options.authenticated {
            if let Some(token) = self.session.token() {
                headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
            }
        }

        if options.method.is_state_changing() {
            if let Some(csrf) = &self.config.csrf_token {
                headers.push((CSRF_HEADER.to_string(), csrf.clone()));
            }
        }

        HttpRequest {
            method: options.method,
            url: self.config.url(endpoint),
            headers,
            body: options.body.map(|body| body.to_string()),
        }
    }
}

fn rejection(response: &HttpResponse) -> ApiError {
    let message = serde_json::from_str::<ErrorDto>(&response.body)
        .ok()
        .and_then(ErrorDto::reason)
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());

    ApiError::Rejected {
        status: response.status,
        message,
    }
}

fn parse_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(body).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}
