//! Generative provider trait and types

use async_trait::async_trait;

use crate::error::Result;

/// Request for one generated recommendation
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Upstream API key, resolved per request
    pub api_key: String,
    /// Instruction text sent as the sole content part
    pub prompt: String,
}

impl GenerateRequest {
    pub fn new(api_key: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            prompt: prompt.into(),
        }
    }
}

/// Response from a successful upstream call
#[derive(Debug, Clone, Default)]
pub struct GenerateResponse {
    /// First candidate's text, None when the upstream returned no candidate
    pub text: Option<String>,
    /// Model that served the call, if reported
    pub model: Option<String>,
}

/// Trait for generative text providers
///
/// Futures are not required to be `Send` so that Workers fetch can implement it.
#[async_trait(?Send)]
pub trait GenerativeProvider {
    /// Get the provider name
    fn name(&self) -> &'static str;

    /// Run one generation. Non-2xx upstream statuses are `Error::Upstream`.
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}
