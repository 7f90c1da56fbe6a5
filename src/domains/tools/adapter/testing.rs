//! In-memory invoker used by tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use super::invoker::{HttpResponse, Invoker};
use super::request::HttpRequestSpec;
use crate::domains::tools::ToolError;

enum Reply {
    Fixed { status: u16, body: Vec<u8> },
    /// Answer with a JSON array holding one record whose label is the request's query string.
    EchoQuery,
    Fail(String),
}

pub struct StubInvoker {
    reply: Reply,
    delay: Option<Duration>,
    calls: AtomicUsize,
    requests: Mutex<Vec<HttpRequestSpec>>,
}

impl StubInvoker {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            delay: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(status: u16, body: &str) -> Self {
        Self::with_reply(Reply::Fixed {
            status,
            body: body.as_bytes().to_vec(),
        })
    }

    pub fn echo_query() -> Self {
        Self::with_reply(Reply::EchoQuery)
    }

    pub fn fail(message: &str) -> Self {
        Self::with_reply(Reply::Fail(message.to_string()))
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<HttpRequestSpec> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Invoker for StubInvoker {
    async fn send(&self, request: HttpRequestSpec) -> Result<HttpResponse, ToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let query = request.url.query().unwrap_or_default().to_string();
        self.requests.lock().unwrap().push(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let (status, body) = match &self.reply {
            Reply::Fixed { status, body } => (*status, body.clone()),
            Reply::EchoQuery => (
                200,
                serde_json::to_vec(&serde_json::json!([{ "label": query }])).unwrap(),
            ),
            Reply::Fail(message) => return Err(ToolError::transport(message.clone())),
        };

        Ok(HttpResponse {
            status,
            headers: HeaderMap::new(),
            body,
        })
    }
}
