//! HTTP client helpers for tests.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use title_guard::gateway::payload::VerifyResponse;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    /// Posts a title and returns the parsed body plus the `x-title-guard-status` header.
    pub async fn verify_title(
        &self,
        title: &str,
    ) -> Result<(VerifyResponse, String), TestClientError> {
        self.verify_raw(serde_json::json!({ "title": title })).await
    }

    pub async fn verify_raw(
        &self,
        body: serde_json::Value,
    ) -> Result<(VerifyResponse, String), TestClientError> {
        let resp = self
            .client
            .post(self.url("/verify_title"))
            .json(&body)
            .send()
            .await?;

        let status_header = resp
            .headers()
            .get("x-title-guard-status")
            .and_then(|h| h.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        match resp.status().as_u16() {
            200 => Ok((resp.json().await?, status_header)),
            400 => Err(TestClientError::BadRequest(resp.json().await?)),
            status => Err(TestClientError::UnexpectedStatus(
                status,
                resp.text().await.unwrap_or_default(),
            )),
        }
    }

    pub async fn health(&self) -> Result<HealthResponse, TestClientError> {
        self.get_json("/healthz").await
    }

    pub async fn ready(&self) -> Result<ReadyResponse, TestClientError> {
        self.get_json("/ready").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, TestClientError> {
        let resp = self.client.get(self.url(path)).send().await?;
        match resp.status().as_u16() {
            200 => Ok(resp.json().await?),
            status => Err(TestClientError::UnexpectedStatus(
                status,
                resp.text().await.unwrap_or_default(),
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComponentStatus {
    pub corpus_size: usize,
    pub embedding_dim: usize,
    pub embedder_mode: String,
    pub restricted_words: usize,
    pub forbidden_affixes: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReadyResponse {
    pub status: String,
    pub components: ComponentStatus,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: u16,
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("request to title-guard failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("rejected as bad request: {0:?}")]
    BadRequest(ErrorBody),

    #[error("unexpected status {0}: {1}")]
    UnexpectedStatus(u16, String),
}
