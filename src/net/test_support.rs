//! Scripted transport for driving the gateway and resource clients in tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use futures::future::LocalBoxFuture;

use super::error::ApiError;
use super::gateway::{Gateway, HttpRequest, HttpResponse, Transport};
use crate::util::token_store::MemoryTokenStore;
use crate::util::unauthorized::UnauthorizedHandler;

/// Replays queued responses in order and records every request it sees.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub(crate) fn respond(&self, response: Result<HttpResponse, ApiError>) -> &Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub(crate) fn respond_json(&self, status: u16, body: serde_json::Value) -> &Self {
        self.respond(Ok(HttpResponse { status, authorization: None, body: body.to_string() }))
    }

    pub(crate) fn respond_json_with_token(&self, status: u16, body: serde_json::Value, authorization: &str) -> &Self {
        self.respond(Ok(HttpResponse {
            status,
            authorization: Some(authorization.to_owned()),
            body: body.to_string(),
        }))
    }

    pub(crate) fn respond_empty(&self, status: u16) -> &Self {
        self.respond(Ok(HttpResponse { status, authorization: None, body: String::new() }))
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }
}

impl Transport for MockTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, ApiError>> {
        self.requests.lock().unwrap().push(request);
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())));
        Box::pin(std::future::ready(next))
    }
}

/// Counts unauthorized signals.
#[derive(Clone, Default)]
pub(crate) struct CountingHandler {
    pub(crate) hits: Arc<AtomicUsize>,
}

impl CountingHandler {
    pub(crate) fn count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl UnauthorizedHandler for CountingHandler {
    fn on_unauthorized(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }
}

pub(crate) struct Harness {
    pub(crate) transport: MockTransport,
    pub(crate) tokens: MemoryTokenStore,
    pub(crate) unauthorized: CountingHandler,
    pub(crate) gateway: Gateway,
}

pub(crate) fn harness() -> Harness {
    let transport = MockTransport::default();
    let tokens = MemoryTokenStore::default();
    let unauthorized = CountingHandler::default();
    let gateway = Gateway::new(Arc::new(transport.clone()), Arc::new(tokens.clone()), Arc::new(unauthorized.clone()));
    Harness { transport, tokens, unauthorized, gateway }
}
