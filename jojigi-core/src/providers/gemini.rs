//! Gemini generateContent wire types and the reqwest-backed provider

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize)]
pub struct GeminiContent {
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
pub struct GeminiPart {
    pub text: String,
}

impl GenerateContentRequest {
    /// Single-turn request carrying `prompt` as the only part
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default, rename = "modelVersion")]
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContentResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiPartResponse {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// `candidates[0].content.parts[0].text`, if present and non-empty
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|t| !t.is_empty())
    }

    pub fn model_version(&self) -> Option<&str> {
        self.model_version.as_deref()
    }
}

#[cfg(feature = "native")]
pub use native::GeminiProvider;

#[cfg(feature = "native")]
mod native {
    use async_trait::async_trait;
    use reqwest::Client;
    use tracing::{debug, error};

    use super::{GenerateContentRequest, GenerateContentResponse};
    use crate::config::{GEMINI_API_BASE, GEMINI_MODEL, generate_content_url};
    use crate::error::{Error, Result};
    use crate::providers::{GenerateRequest, GenerateResponse, GenerativeProvider};

    // The request URL carries the API key in its query string
    fn redact(err: reqwest::Error) -> Error {
        Error::Network(err.without_url())
    }

    /// Gemini provider over reqwest
    pub struct GeminiProvider {
        client: Client,
        base_url: String,
    }

    impl GeminiProvider {
        pub fn new() -> Self {
            Self {
                client: Client::new(),
                base_url: GEMINI_API_BASE.to_string(),
            }
        }

        /// Point the provider at a different host (used by tests)
        pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
            self.base_url = base_url.into();
            self
        }
    }

    impl Default for GeminiProvider {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait(?Send)]
    impl GenerativeProvider for GeminiProvider {
        fn name(&self) -> &'static str {
            "Gemini"
        }

        async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
            let url = generate_content_url(&self.base_url, GEMINI_MODEL, &request.api_key);
            let body = GenerateContentRequest::from_prompt(request.prompt);

            debug!("Sending generateContent request to Gemini model {}", GEMINI_MODEL);

            let response = self
                .client
                .post(&url)
                .header("Content-Type", "application/json")
                .json(&body)
                .send()
                .await
                .map_err(redact)?;

            if !response.status().is_success() {
                let status = response.status().as_u16();
                let error_text = response.text().await.unwrap_or_default();
                error!("Gemini API error: {} - {}", status, error_text);
                return Err(Error::Upstream {
                    status,
                    body: error_text,
                });
            }

            let text = response.text().await.map_err(redact)?;
            let parsed: GenerateContentResponse = serde_json::from_str(&text)?;

            Ok(GenerateResponse {
                text: parsed.first_text().map(str::to_string),
                model: parsed.model_version().map(str::to_string),
            })
        }
    }
}
