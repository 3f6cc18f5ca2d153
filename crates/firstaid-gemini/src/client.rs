//! HTTP client for the Gemini `generateContent` REST endpoint.
//!
//! Wraps `reqwest` with API key handling, request shaping, and typed error
//! mapping. Every non-2xx reply is surfaced as a [`CompletionError`] variant;
//! the caller decides how to present it.

use std::time::Duration;

use base64::Engine;
use reqwest::{Client, StatusCode, Url};

use crate::error::CompletionError;
use crate::provider::{CompletionProvider, CompletionRequest};
use crate::types::{
    Content, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GoogleSearch,
    InlineData, Part, Tool,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";

/// Client for the Gemini REST API.
///
/// Use [`GeminiClient::new`] for production or [`GeminiClient::with_base_url`]
/// to point at a mock server in tests.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl GeminiClient {
    /// Creates a client pointed at the production Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, CompletionError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CompletionError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `join` appends below the version
        // segment instead of replacing it.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| CompletionError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// `{base}/models/{model}:generateContent`
    fn endpoint(&self, model: &str) -> Result<Url, CompletionError> {
        let model = model.trim_start_matches("models/");
        self.base_url
            .join(&format!("models/{model}:generateContent"))
            .map_err(|e| CompletionError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    /// Maps a [`CompletionRequest`] onto the REST body.
    fn build_body(request: &CompletionRequest) -> GenerateContentRequest {
        let mut parts = vec![Part {
            text: Some(request.prompt.clone()),
            inline_data: None,
        }];
        if let Some(image) = &request.image {
            parts.push(Part {
                text: None,
                inline_data: Some(InlineData {
                    mime_type: image.mime_type.clone(),
                    data: base64::engine::general_purpose::STANDARD.encode(&image.data),
                }),
            });
        }

        let system_instruction = request.system_instruction.as_ref().map(|text| Content {
            role: None,
            parts: vec![Part {
                text: Some(text.clone()),
                inline_data: None,
            }],
        });

        let tools = if request.grounding {
            vec![Tool {
                google_search: GoogleSearch {},
            }]
        } else {
            Vec::new()
        };

        GenerateContentRequest {
            system_instruction,
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
            tools,
        }
    }

    /// Converts a non-2xx reply into the matching error variant.
    fn status_error(status: StatusCode, body: &str, model: &str) -> CompletionError {
        let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok();
        let message = envelope
            .as_ref()
            .map(|e| e.error.message.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| status.to_string());
        let api_status = envelope.map(|e| e.error.status).unwrap_or_default();

        match status {
            StatusCode::NOT_FOUND => CompletionError::ModelNotFound {
                model: model.to_string(),
            },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                CompletionError::Unauthorized(message)
            }
            StatusCode::BAD_REQUEST if message.contains("API key") => {
                CompletionError::Unauthorized(message)
            }
            StatusCode::TOO_MANY_REQUESTS => CompletionError::RateLimited(message),
            _ if api_status == "UNAUTHENTICATED" || api_status == "PERMISSION_DENIED" => {
                CompletionError::Unauthorized(message)
            }
            _ => CompletionError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

impl CompletionProvider for GeminiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        let url = self.endpoint(&request.model)?;
        let body = Self::build_body(&request);

        tracing::debug!(
            model = %request.model,
            has_image = request.image.is_some(),
            grounding = request.grounding,
            "sending generateContent request"
        );

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Self::status_error(status, &text, &request.model));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&text).map_err(|e| CompletionError::Deserialize {
                context: format!("generateContent(model={})", request.model),
                source: e,
            })?;

        Ok(parsed.text())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
