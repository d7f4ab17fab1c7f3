//! HTTP seam between the aggregation logic and the indexing API.

use std::future::Future;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use crate::error::FetchError;

/// Header carrying the per-project API credential.
pub const PROJECT_ID_HEADER: &str = "project_id";

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Status and raw body of one GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues authenticated GET requests against the indexing API.
///
/// Non-success statuses are returned as responses, not errors; only failures
/// to obtain a response at all are [`FetchError::Transport`].
pub trait Transport: Send + Sync {
    fn get(
        &self,
        url: &str,
        project_id: &str,
    ) -> impl Future<Output = Result<TransportResponse, FetchError>> + Send;
}

/// [`Transport`] backed by a pooled `reqwest::Client`.
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn get(
        &self,
        url: &str,
        project_id: &str,
    ) -> impl Future<Output = Result<TransportResponse, FetchError>> + Send {
        let request = self
            .http
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .header(PROJECT_ID_HEADER, project_id);
        let url = url.to_string();

        async move {
            let response = request.send().await.map_err(|e| {
                let reason = if e.is_timeout() {
                    format!("request timed out: {e}")
                } else if e.is_connect() {
                    format!("connection failed: {e}")
                } else {
                    e.to_string()
                };
                FetchError::Transport {
                    url: url.clone(),
                    reason,
                }
            })?;

            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|e| FetchError::Transport {
                    url: url.clone(),
                    reason: format!("failed to read response body: {e}"),
                })?
                .to_vec();

            Ok(TransportResponse { status, body })
        }
    }
}
