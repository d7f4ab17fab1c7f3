//! Nullable indexer transport: scripted responses, recorded requests.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use adakit_indexer::{paged_url, FetchError, Transport, TransportResponse};
use serde_json::Value;

/// A request seen by [`NullTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub project_id: String,
}

/// A test transport that answers from a URL -> response table.
///
/// Unregistered URLs answer `404` with an error object, like the real service.
#[derive(Default)]
pub struct NullTransport {
    responses: Mutex<HashMap<String, Result<TransportResponse, FetchError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl NullTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with `status` and a JSON body.
    pub fn respond(&self, url: impl Into<String>, status: u16, body: &Value) -> &Self {
        let response = TransportResponse {
            status,
            body: body.to_string().into_bytes(),
        };
        self.lock_responses().insert(url.into(), Ok(response));
        self
    }

    /// Answer `url` with `200` and a JSON body.
    pub fn respond_ok(&self, url: impl Into<String>, body: Value) -> &Self {
        self.respond(url, 200, &body)
    }

    /// Answer `url` with a raw, possibly non-JSON body.
    pub fn respond_raw(&self, url: impl Into<String>, status: u16, body: &[u8]) -> &Self {
        let response = TransportResponse {
            status,
            body: body.to_vec(),
        };
        self.lock_responses().insert(url.into(), Ok(response));
        self
    }

    /// Fail `url` before any response is received.
    pub fn fail(&self, url: impl Into<String>, reason: &str) -> &Self {
        let url = url.into();
        let error = FetchError::Transport {
            url: url.clone(),
            reason: reason.to_string(),
        };
        self.lock_responses().insert(url, Err(error));
        self
    }

    /// Register `pages` as pages 1..=n of `endpoint`, followed by an empty page.
    pub fn with_pages(&self, endpoint: &str, pages: Vec<Vec<Value>>) -> &Self {
        let count = pages.len() as u32;
        for (page, items) in (1..).zip(pages) {
            self.respond_ok(paged_url(endpoint, page), Value::Array(items));
        }
        self.respond_ok(paged_url(endpoint, count + 1), Value::Array(Vec::new()))
    }

    /// All requests made so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// URLs requested so far, in order.
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }

    /// Clear all scripted responses and recorded requests.
    pub fn reset(&self) {
        self.lock_responses().clear();
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }

    fn lock_responses(
        &self,
    ) -> std::sync::MutexGuard<'_, HashMap<String, Result<TransportResponse, FetchError>>> {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn answer(&self, url: &str, project_id: &str) -> Result<TransportResponse, FetchError> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedRequest {
                url: url.to_string(),
                project_id: project_id.to_string(),
            });

        self.lock_responses().get(url).cloned().unwrap_or_else(|| {
            Ok(TransportResponse {
                status: 404,
                body: br#"{"status_code":404,"error":"Not Found"}"#.to_vec(),
            })
        })
    }
}

impl Transport for NullTransport {
    fn get(
        &self,
        url: &str,
        project_id: &str,
    ) -> impl Future<Output = Result<TransportResponse, FetchError>> + Send {
        let answer = self.answer(url, project_id);
        async move { answer }
    }
}
