//! In-memory transport answering from a queue of scripted responses.

use std::{cell::RefCell, collections::VecDeque};

use marketplace::{
    api::{HttpRequest, HttpResponse, Transport},
    error::TransportError,
};
use serde_json::Value;

/// Answers requests in the order responses were queued and records every
/// request it receives.
///
/// A request arriving with nothing queued fails like an unreachable server.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn respond(&self, status: u16, body: impl Into<String>) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.into(),
        }));
    }

    pub fn respond_json(&self, status: u16, body: &Value) {
        self.respond(status, body.to_string());
    }

    /// Queue a failure to obtain any response.
    pub fn fail(&self, reason: impl Into<String>) {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError(reason.into())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }

    /// Number of scripted responses not yet consumed.
    pub fn pending(&self) -> usize {
        self.responses.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);

        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("No scripted response".to_string())))
    }
}
