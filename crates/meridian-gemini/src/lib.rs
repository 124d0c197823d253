//! Gemini `generateContent` adapter for the core provider trait.
//!
//! Sends questions to the hosted Gemini API with the Google Search tool
//! enabled and translates HTTP failures into the structured failure value
//! the core classifier consumes.

mod wire;

use async_trait::async_trait;
use log::{debug, warn};
use meridian_core::{GenerateProvider, ProviderError};
use std::time::Duration;
use wire::{GenerateRequest, GenerateResponse};

/// Hosted Gemini API root.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Upper bound on a single remote call; expiry surfaces as a transport
/// failure per the core contract.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Client for the Gemini generate API with search grounding.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client for the hosted API.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Build a client against a custom API root (tests, proxies).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ProviderError::Transport(err.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl GenerateProvider for GeminiClient {
    async fn generate_with_search(
        &self,
        model: &str,
        question: &str,
        temperature: f32,
    ) -> Result<Option<String>, ProviderError> {
        let url = format!("{}/models/{model}:generateContent", self.base_url);
        let body = GenerateRequest::with_search(question, temperature);
        debug!("posting generate request (model={model}, url={url})");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|err| ProviderError::Transport(err.to_string()))?;
            warn!("generate request failed (status={status})");
            return Err(ProviderError::Api(wire::failure_from_response(
                status.as_u16(),
                &body,
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;
        Ok(parsed.answer_text())
    }
}
