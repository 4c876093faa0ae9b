/*!
 * Google Translate client.
 */

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::errors::ProviderError;
use crate::providers::Translator;

/// Google Translate client using the public `translate_a/single` endpoint
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    /// Base URL of the translation service
    base_url: String,
    /// HTTP client for making requests
    client: Client,
}

impl GoogleTranslator {
    /// Create a new translator for the given endpoint
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }

    fn request_url(&self, text: &str, source_language: &str, target_language: &str) -> Result<Url, ProviderError> {
        Url::parse_with_params(
            &format!("{}/translate_a/single", self.base_url),
            &[
                ("client", "gtx"),
                ("sl", source_language),
                ("tl", target_language),
                ("dt", "t"),
                ("q", text),
            ],
        )
        .map_err(|e| ProviderError::RequestFailed(format!("Invalid translator endpoint: {}", e)))
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        let url = self.request_url(text, source_language, target_language)?;
        debug!("Translating {} characters {} -> {}", text.chars().count(), source_language, target_language);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status.as_u16() == 429 {
            return Err(ProviderError::RateLimitExceeded(format!("HTTP {}", status)));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: message.chars().take(200).collect(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(format!("Failed to parse translation response: {}", e)))?;
        extract_translation(&body)
    }
}

/// Join the translated sentences of a `dt=t` response
///
/// The payload looks like `[[["Hello ","Hallo",...],["world","Welt",...]],null,"de"]`.
pub fn extract_translation(body: &Value) -> Result<String, ProviderError> {
    let sentences = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| ProviderError::ParseError("Translation response has no sentences".to_string()))?;

    Ok(sentences
        .iter()
        .filter_map(|sentence| sentence.get(0).and_then(Value::as_str))
        .collect())
}
