//! Transport for the recommend endpoint

use async_trait::async_trait;

use crate::error::Result;
use crate::types::PromptRequest;

/// Fallback message when an error response carries no `error` field
pub const UNKNOWN_ERROR: &str = "Unknown Error";

/// Issues one recommend POST and returns the recommendation text.
///
/// Failures carry only the message shown to the user.
#[async_trait(?Send)]
pub trait RecommendApi {
    async fn recommend(&self, request: &PromptRequest) -> Result<String>;
}

#[cfg(feature = "native")]
pub use native::HttpRecommendApi;

#[cfg(feature = "native")]
mod native {
    use async_trait::async_trait;
    use reqwest::Client;
    use serde_json::Value;
    use tracing::{debug, error};

    use super::{RecommendApi, UNKNOWN_ERROR};
    use crate::config::RECOMMEND_PATH;
    use crate::error::{Error, Result};
    use crate::types::{PromptRequest, PromptResponse};

    /// reqwest client for a deployed recommend endpoint
    pub struct HttpRecommendApi {
        client: Client,
        endpoint: String,
    }

    impl HttpRecommendApi {
        /// `origin` is the site root, e.g. `https://jojigi.pages.dev`
        pub fn new(origin: &str) -> Self {
            Self {
                client: Client::new(),
                endpoint: format!("{}{}", origin.trim_end_matches('/'), RECOMMEND_PATH),
            }
        }

        pub fn endpoint(&self) -> &str {
            &self.endpoint
        }
    }

    #[async_trait(?Send)]
    impl RecommendApi for HttpRecommendApi {
        async fn recommend(&self, request: &PromptRequest) -> Result<String> {
            debug!("POST {}", self.endpoint);

            let response = self
                .client
                .post(&self.endpoint)
                .header("Content-Type", "application/json")
                .json(&request.to_wire())
                .send()
                .await?;

            let status = response.status();
            let text = response.text().await?;

            if !status.is_success() {
                let message = serde_json::from_str::<Value>(&text)
                    .ok()
                    .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
                    .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
                error!("recommend endpoint returned {}: {}", status, message);
                return Err(Error::Api(message));
            }

            match serde_json::from_str::<PromptResponse>(&text)? {
                PromptResponse::Recommendation { recommendation } => Ok(recommendation),
                PromptResponse::Error { error } => Err(Error::Api(error)),
            }
        }
    }
}
