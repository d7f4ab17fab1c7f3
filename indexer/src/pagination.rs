//! Exhaustive page-numbered pagination for list endpoints.

use serde_json::Value;

use crate::error::FetchError;
use crate::transport::Transport;

/// Items requested per page.
pub const PAGE_SIZE: u32 = 100;

/// Order requested for every page.
pub const PAGE_ORDER: &str = "desc";

/// URL of one page of a list endpoint.
pub fn paged_url(endpoint: &str, page: u32) -> String {
    format!("{endpoint}?page={page}&count={PAGE_SIZE}&order={PAGE_ORDER}")
}

/// Drains page-numbered collections into one ordered sequence.
///
/// Pages are requested strictly one after another, starting at 1, until a
/// page comes back empty. There is no page cap, timeout or retry here: the
/// first rejected or malformed page aborts the drain and the pages collected
/// so far are dropped.
pub struct PagedFetcher<'a, T> {
    transport: &'a T,
    project_id: &'a str,
}

impl<'a, T: Transport> PagedFetcher<'a, T> {
    pub fn new(transport: &'a T, project_id: &'a str) -> Self {
        Self {
            transport,
            project_id,
        }
    }

    /// GET `url` and parse a successful body as JSON.
    pub async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self.transport.get(url, self.project_id).await?;
        if !response.is_success() {
            tracing::warn!(%url, status = response.status, "indexer rejected request");
            return Err(FetchError::UpstreamRejected {
                url: url.to_string(),
                status: response.status,
            });
        }

        serde_json::from_slice(&response.body).map_err(|e| FetchError::UpstreamMalformed {
            url: url.to_string(),
            reason: format!("invalid JSON: {e}"),
        })
    }

    /// GET one page; the body must be a JSON array.
    ///
    /// The service answers some malformed queries with a success status and an
    /// error object, so the shape is checked rather than assumed.
    pub async fn fetch_page(&self, url: &str) -> Result<Vec<Value>, FetchError> {
        match self.fetch_json(url).await? {
            Value::Array(items) => Ok(items),
            other => {
                tracing::warn!(%url, "expected a JSON array page");
                Err(FetchError::UpstreamMalformed {
                    url: url.to_string(),
                    reason: format!("expected a JSON array, got {}", json_kind(&other)),
                })
            }
        }
    }

    /// Fetch every page produced by `page_url` until an empty page.
    pub async fn fetch_all<F>(&self, page_url: F) -> Result<Vec<Value>, FetchError>
    where
        F: Fn(u32) -> String,
    {
        let mut all = Vec::new();
        let mut page: u32 = 1;
        loop {
            let url = page_url(page);
            let items = self.fetch_page(&url).await?;
            if items.is_empty() {
                break;
            }
            tracing::debug!(%url, page, items = items.len(), "fetched page");
            all.extend(items);
            page += 1;
        }
        tracing::debug!(pages = page - 1, items = all.len(), "pagination complete");
        Ok(all)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_carries_paging_parameters() {
        assert_eq!(
            paged_url("https://indexer/assets/policy/abc", 3),
            "https://indexer/assets/policy/abc?page=3&count=100&order=desc"
        );
    }

    #[test]
    fn json_kind_names() {
        assert_eq!(json_kind(&serde_json::json!({"error": "x"})), "an object");
        assert_eq!(json_kind(&Value::Null), "null");
    }
}
