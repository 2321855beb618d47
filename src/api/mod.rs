// Blog generation service client

pub mod normalize;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::models::{AppConfig, Blog};
use crate::progress::{self, ProgressSink};

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to reach blog service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("blog service responded with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed blog response: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GenerateRequest {
    pub topic: String,
    pub tone: String,
}

impl GenerateRequest {
    pub fn new(topic: impl Into<String>, tone: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            tone: tone.into(),
        }
    }
}

/// Response body as the service sends it, before any fallbacks are applied.
#[derive(Debug, Deserialize)]
pub struct RawBlogResponse {
    pub content: String,
    pub metadata: RawMetadata,
}

#[derive(Debug, Deserialize)]
pub struct RawMetadata {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub reading_time: Option<String>,
    /// The key the service actually sends; `reading_time` wins when both exist.
    #[serde(default, rename = "readingTime")]
    pub reading_time_camel: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// Produces a blog for a request, reporting progress while it works.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogGenerator: Send + Sync {
    async fn generate(
        &self,
        request: GenerateRequest,
        sink: Arc<dyn ProgressSink>,
    ) -> Result<Blog, GenerateError>;
}

#[derive(Debug, Clone)]
pub struct BlogClient {
    base_url: String,
    client: Client,
    progress_unit: Duration,
}

impl BlogClient {
    pub fn new(base_url: &str, request_timeout: u64, progress_unit: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(request_timeout))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            progress_unit,
        })
    }

    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        Self::new(
            &config.api_url,
            config.request_timeout,
            Duration::from_millis(config.progress_unit_ms),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn request_blog(&self, request: &GenerateRequest) -> Result<Blog, GenerateError> {
        let url = format!("{}/generate", self.base_url);
        log::info!("Requesting blog on {:?} ({}) from {url}", request.topic, request.tone);

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GenerateError::Status {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        let body = response.text().await?;
        let raw = serde_json::from_str::<RawBlogResponse>(&body)
            .map_err(|e| GenerateError::Malformed(e.to_string()))?;
        if raw.content.trim().is_empty() {
            return Err(GenerateError::Malformed("empty content".to_string()));
        }

        Ok(normalize::normalize(raw))
    }
}

#[async_trait]
impl BlogGenerator for BlogClient {
    /// Send the request and run the progress script side by side.
    ///
    /// Resolves only after both have finished, so a fast response still
    /// waits for "Blog completed!" and a failure surfaces after it.
    async fn generate(
        &self,
        request: GenerateRequest,
        sink: Arc<dyn ProgressSink>,
    ) -> Result<Blog, GenerateError> {
        log::info!(
            "Progress script runs for {:?}",
            progress::total_duration(self.progress_unit)
        );
        let (result, ()) = futures::future::join(
            self.request_blog(&request),
            progress::simulate(sink.as_ref(), self.progress_unit),
        )
        .await;

        match &result {
            Ok(blog) => log::info!("Generated blog {:?}", blog.metadata.slug),
            Err(e) => log::error!("Blog generation failed: {e}"),
        }
        result
    }
}

/// Pull a readable message out of an error body.
///
/// The service answers with `{"error": "..."}` or
/// `{"error": {"status": .., "message": ".."}}`; anything else is kept raw.
fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.trim().to_string();
    };

    match value.get("error") {
        Some(serde_json::Value::String(message)) => message.clone(),
        Some(error) => error
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| body.trim().to_string(), ToString::to_string),
        None => body.trim().to_string(),
    }
}
