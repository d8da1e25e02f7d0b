use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};
use std::time::Duration;

use crate::errors::{AppError, AppResult};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Narrow seam over the external text-generation service so the pipeline can
/// be exercised without network access.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextCompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}

pub struct GeminiClient {
    client: reqwest::Client,
    api_key: SecretString,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: SecretString, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model: model.into(),
        }
    }

    fn extract_text(body: &Value) -> Option<String> {
        let text = body
            .get("candidates")?
            .get(0)?
            .get("content")?
            .get("parts")?
            .get(0)?
            .get("text")?
            .as_str()?;
        Some(text.to_string())
    }
}

#[async_trait]
impl TextCompletionClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let url = format!("{}/{}:generateContent", GEMINI_API_BASE, self.model);
        let payload = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&payload)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::AiError(format!(
                "Gemini API error {}: {}",
                status, detail
            )));
        }

        let body: Value = response.json().await?;

        Self::extract_text(&body)
            .ok_or_else(|| AppError::AiError("Gemini response contained no text".to_string()))
    }
}
