//! Hand-written port doubles shared by the unit tests.
#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Notify;
use trekway_domain::{RequestEnvelope, ToastRequest};
use url::Url;

use crate::config::ClientConfig;
use crate::http_service::HttpService;
use crate::pipeline::ApiClient;
use crate::ports::{
    HttpTransport, Navigator, Notifier, SessionStore, TransportError, TransportResponse,
};
use crate::session_guard::SessionGuard;

pub const BASE_URL: &str = "https://api.trekway.test";

/// Session store with a fixed token that counts clears.
#[derive(Default)]
pub struct StubSession {
    token: Mutex<Option<String>>,
    clears: Mutex<usize>,
}

impl StubSession {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
            clears: Mutex::new(0),
        }
    }

    pub fn clear_count(&self) -> usize {
        *self.clears.lock()
    }
}

impl SessionStore for StubSession {
    fn bearer_token(&self) -> Option<String> {
        self.token.lock().clone()
    }

    fn clear_session(&self) {
        *self.token.lock() = None;
        *self.clears.lock() += 1;
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.lock().push(path.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<ToastRequest>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<ToastRequest> {
        self.toasts.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: ToastRequest) {
        self.toasts.lock().push(toast);
    }
}

/// Transport answering from a queue of canned results.
///
/// Once the queue is drained it answers `200 {}`. An optional gate holds
/// every call until it is opened.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
    sent: Mutex<Vec<(RequestEnvelope, Url)>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        let transport = Self::default();
        transport.push(Ok(TransportResponse::new(status, body.as_bytes())));
        transport
    }

    pub fn failing(error: TransportError) -> Self {
        let transport = Self::default();
        transport.push(Err(error));
        transport
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn push(&self, reply: Result<TransportResponse, TransportError>) {
        self.replies.lock().push_back(reply);
    }

    pub fn sent(&self) -> Vec<(RequestEnvelope, Url)> {
        self.sent.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().len()
    }
}

impl HttpTransport for ScriptedTransport {
    fn send(
        &self,
        request: &RequestEnvelope,
        url: &Url,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send {
        self.sent.lock().push((request.clone(), url.clone()));
        let reply = self
            .replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(TransportResponse::new(200, "{}")));
        let gate = self.gate.clone();
        async move {
            if let Some(gate) = gate {
                gate.notified().await;
            }
            reply
        }
    }
}

/// Every double wired together, with the handles tests inspect.
pub struct Harness {
    pub transport: Arc<ScriptedTransport>,
    pub session: Arc<StubSession>,
    pub navigator: Arc<RecordingNavigator>,
    pub notifier: Arc<RecordingNotifier>,
}

impl Harness {
    pub fn new(transport: ScriptedTransport) -> Self {
        Self {
            transport: Arc::new(transport),
            session: Arc::new(StubSession::default()),
            navigator: Arc::new(RecordingNavigator::default()),
            notifier: Arc::new(RecordingNotifier::default()),
        }
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.session = Arc::new(StubSession::with_token(token));
        self
    }

    #[allow(clippy::unwrap_used)]
    pub fn client(&self) -> ApiClient<ScriptedTransport> {
        let config = Arc::new(ClientConfig::new(BASE_URL).unwrap());
        let guard = SessionGuard::new(
            self.session.clone(),
            self.navigator.clone(),
            config.login_path(),
        );
        ApiClient::new(self.transport.clone(), config, guard, self.notifier.clone())
    }

    pub fn http(&self) -> HttpService<ScriptedTransport> {
        HttpService::new(self.client())
    }
}
