//! Shared test doubles.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Notify;

use crate::page::{NavigationIntent, Navigator, Notifier, Toast};
use crate::request::RequestDescriptor;
use crate::transport::{Transport, TransportError};

/// Replays queued responses and records every request it receives.
#[derive(Default)]
pub(crate) struct RecordingTransport {
    responses: Mutex<VecDeque<Result<Value, TransportError>>>,
    requests: Mutex<Vec<RequestDescriptor>>,
    gate: Option<Arc<Notify>>,
}

impl RecordingTransport {
    pub(crate) fn new(responses: Vec<Result<Value, TransportError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Each request takes its response on arrival, then waits for a wakeup on
    /// `gate` before answering.
    pub(crate) fn gated(responses: Vec<Result<Value, TransportError>>, gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(responses)
        }
    }

    pub(crate) fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().expect("requests").clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().expect("requests").len()
    }

    pub(crate) fn calls_to(&self, path_with_query: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.path_with_query() == path_with_query)
            .count()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: &RequestDescriptor) -> Result<Value, TransportError> {
        self.requests.lock().expect("requests").push(request.clone());
        let response = self
            .responses
            .lock()
            .expect("responses")
            .pop_front()
            .unwrap_or(Ok(Value::Null));
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        response
    }
}

pub(crate) fn server_error(status: u16, body: &str) -> TransportError {
    TransportError::Status {
        status,
        body: body.to_string(),
    }
}

/// Keeps every toast it receives, in order.
#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub(crate) fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().expect("toasts").clone()
    }

    pub(crate) fn texts(&self) -> Vec<String> {
        self.toasts().into_iter().map(|t| t.text).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().expect("toasts").push(toast);
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingNavigator {
    intents: Mutex<Vec<NavigationIntent>>,
}

impl RecordingNavigator {
    pub(crate) fn intents(&self) -> Vec<NavigationIntent> {
        self.intents.lock().expect("intents").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, intent: NavigationIntent) {
        self.intents.lock().expect("intents").push(intent);
    }
}
