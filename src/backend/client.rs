//! HTTP client for the summarization service.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Config;

use super::error::{extract_error_detail, SubmitError};

/// Capability for submitting text to the summarization service.
///
/// The UI holds this as a trait object so tests can drive it with a mock
/// instead of a live server.
#[async_trait]
pub trait SummarizeBackend: Send + Sync {
    /// Submit `text` and return the generated summary.
    async fn summarize(&self, text: &str) -> Result<String, SubmitError>;
}

/// `SummarizeBackend` backed by the configured HTTP endpoint.
pub struct SummarizeClient {
    http: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SummarizeResponse {
    summary: String,
}

impl SummarizeClient {
    pub fn new(config: &Config) -> Result<Self, SubmitError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.backend.timeout_seconds)))
            .build()
            .map_err(|e| SubmitError::Unexpected(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.backend.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/summarize", self.base_url)
    }
}

#[async_trait]
impl SummarizeBackend for SummarizeClient {
    async fn summarize(&self, text: &str) -> Result<String, SubmitError> {
        let url = self.endpoint();

        tracing::debug!(url = %url, chars = text.len(), "sending summarize request");

        let response = self
            .http
            .post(&url)
            .json(&SummarizeRequest { text })
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = extract_error_detail(&body);
            tracing::warn!(status = %status, detail = %detail, "summarize request rejected");
            return Err(SubmitError::Server {
                status: status.as_u16(),
                detail,
            });
        }

        let body: SummarizeResponse = response
            .json()
            .await
            .map_err(|e| SubmitError::Unexpected(format!("malformed response body: {}", e)))?;

        tracing::debug!(chars = body.summary.len(), "summary received");
        Ok(body.summary)
    }
}

/// Classify a transport-level failure: if the request went out but no
/// response came back (unreachable host, timeout, connection drop), that is
/// a network error. Everything else is unexpected.
fn classify_send_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() || err.is_connect() || err.is_request() {
        SubmitError::Network(err.to_string())
    } else {
        SubmitError::Unexpected(err.to_string())
    }
}
