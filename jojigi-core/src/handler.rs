//! Recommend request handler
//!
//! `recommend` holds the request logic and returns a typed result;
//! `handle` is the boundary that turns it into a JSON response with CORS
//! headers. The handler never fails: every error becomes a response.

use tracing::{debug, error, warn};

use crate::config::MISSING_KEY_MESSAGE;
use crate::error::{Error, Result};
use crate::prompt::build_prompt;
use crate::providers::{GenerateRequest, GenerativeProvider};
use crate::types::{PromptRequest, PromptResponse};

/// Headers attached to every response
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Other,
}

impl HttpMethod {
    pub fn parse(method: &str) -> Self {
        match method.to_ascii_uppercase().as_str() {
            "GET" => HttpMethod::Get,
            "HEAD" => HttpMethod::Head,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "PATCH" => HttpMethod::Patch,
            "DELETE" => HttpMethod::Delete,
            "OPTIONS" => HttpMethod::Options,
            _ => HttpMethod::Other,
        }
    }
}

/// Transport-neutral view of an incoming request
#[derive(Debug, Clone)]
pub struct HandlerRequest {
    pub method: HttpMethod,
    pub body: Vec<u8>,
}

impl HandlerRequest {
    pub fn new(method: HttpMethod, body: impl Into<Vec<u8>>) -> Self {
        Self {
            method,
            body: body.into(),
        }
    }
}

/// Transport-neutral response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: Option<String>,
}

impl HandlerResponse {
    /// Empty CORS preflight response
    pub fn preflight() -> Self {
        Self {
            status: 200,
            headers: CORS_HEADERS.to_vec(),
            body: None,
        }
    }

    pub fn json(status: u16, payload: &PromptResponse) -> Self {
        let body = serde_json::to_string(payload)
            .unwrap_or_else(|_| r#"{"error":"Internal Server Error"}"#.to_string());
        let mut headers = CORS_HEADERS.to_vec();
        headers.push(("Content-Type", "application/json"));
        Self {
            status,
            headers,
            body: Some(body),
        }
    }

    pub fn not_found() -> Self {
        Self::json(404, &PromptResponse::error("Not Found"))
    }

    /// Look up a header by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }

    /// Decode the JSON body, if any
    pub fn payload(&self) -> Option<PromptResponse> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

/// Successful outcome of a recommend call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub text: String,
    /// True when the upstream returned no candidate and the placeholder was used
    pub placeholder: bool,
}

/// Run one recommend request through `provider`.
///
/// The API key is checked before the body is read, so no upstream call is
/// made without it.
pub async fn recommend<P>(
    method: HttpMethod,
    body: &[u8],
    api_key: Option<&str>,
    provider: &P,
) -> Result<Recommendation>
where
    P: GenerativeProvider + ?Sized,
{
    if method != HttpMethod::Post {
        return Err(Error::MethodNotAllowed);
    }

    let api_key = api_key.ok_or_else(|| Error::ConfigMissing(MISSING_KEY_MESSAGE.to_string()))?;

    let request = PromptRequest::from_body(body);
    debug!(
        "recommend: target={:?}, style={:?}, intensity={:?}, lang={:?}",
        request.target, request.style, request.intensity, request.language
    );

    let prompt = build_prompt(&request);
    let response = provider
        .generate(GenerateRequest::new(api_key, prompt))
        .await?;

    match response.text {
        Some(text) => Ok(Recommendation {
            text,
            placeholder: false,
        }),
        None => {
            warn!("{} returned no candidate text, using placeholder", provider.name());
            Ok(Recommendation {
                text: request.language.placeholder().to_string(),
                placeholder: true,
            })
        }
    }
}

/// Handle one HTTP request end to end
pub async fn handle<P>(request: &HandlerRequest, api_key: Option<&str>, provider: &P) -> HandlerResponse
where
    P: GenerativeProvider + ?Sized,
{
    if request.method == HttpMethod::Options {
        return HandlerResponse::preflight();
    }

    match recommend(request.method, &request.body, api_key, provider).await {
        Ok(recommendation) => {
            HandlerResponse::json(200, &PromptResponse::recommendation(recommendation.text))
        }
        Err(err) => {
            error!("recommend failed: {}", err);
            HandlerResponse::json(err.status_code(), &PromptResponse::error(err.to_string()))
        }
    }
}
