//! Executes request descriptors against the backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client, Response, Url,
    header::{COOKIE, HeaderValue},
};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::request::RequestDescriptor;

const SESSION_COOKIE: &str = "JSESSIONID";

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse response body: {0}")]
    Decode(String),
    #[error("invalid session header: {0}")]
    InvalidHeader(String),
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Anything able to run a [`RequestDescriptor`] and hand back the JSON payload.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &RequestDescriptor) -> Result<Value, TransportError>;
}

/// `reqwest`-backed transport talking to a live backend.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    base: Url,
    session: Option<String>,
}

impl HttpTransport {
    pub fn new(
        base: &Url,
        session: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let base = with_trailing_slash(base.clone());
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base,
            session,
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("ucsb-admin/", env!("CARGO_PKG_VERSION"))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn session_header(&self) -> Result<Option<HeaderValue>, TransportError> {
        self.session
            .as_ref()
            .map(|session| {
                HeaderValue::from_str(&format!("{SESSION_COOKIE}={session}"))
                    .map_err(|e| TransportError::InvalidHeader(e.to_string()))
            })
            .transpose()
    }

    /// Resolves an absolute API path (`/api/...`) under the configured base.
    pub fn url(&self, path: &str) -> Result<Url, TransportError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(TransportError::Url)
    }

    async fn handle(resp: Response) -> Result<Value, TransportError> {
        let status = resp.status();
        let bytes = resp.bytes().await?;
        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &RequestDescriptor) -> Result<Value, TransportError> {
        let mut url = self.url(&request.url)?;
        let pairs = request.query_pairs();
        if !pairs.is_empty() {
            url.set_query(None);
            let mut qp = url.query_pairs_mut();
            for (k, v) in &pairs {
                qp.append_pair(k, v);
            }
        }

        debug!(method = %request.method, url = %url, "sending backend request");

        let mut req = self.client.request(request.method.clone(), url);
        if let Some(cookie) = self.session_header()? {
            req = req.header(COOKIE, cookie);
        }
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        Self::handle(resp).await
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
