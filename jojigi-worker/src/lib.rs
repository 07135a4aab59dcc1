//! Cloudflare Worker serving the prank recommend endpoint
//!
//! Builds a localized prompt from the request body and asks Gemini for one
//! prank plan. API key stored as Cloudflare secret: JOJIGI_API_KEY

use async_trait::async_trait;
use jojigi::config::{self, GEMINI_API_BASE, GEMINI_MODEL, RECOMMEND_PATH};
use jojigi::handler::{self, HandlerRequest, HandlerResponse, HttpMethod};
use jojigi::providers::{
    GenerateContentRequest, GenerateContentResponse, GenerateRequest, GenerateResponse,
    GenerativeProvider,
};
use worker::{event, Env, Fetch, Headers, Method, Request, RequestInit, Response, Result};

// ============ Gemini over Fetch ============

struct FetchGeminiProvider;

fn transport_error(e: worker::Error) -> jojigi::Error {
    jojigi::Error::Transport(e.to_string())
}

#[async_trait(?Send)]
impl GenerativeProvider for FetchGeminiProvider {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    async fn generate(&self, request: GenerateRequest) -> jojigi::Result<GenerateResponse> {
        let url = config::generate_content_url(GEMINI_API_BASE, GEMINI_MODEL, &request.api_key);
        let body = serde_json::to_vec(&GenerateContentRequest::from_prompt(request.prompt))?;

        let headers = Headers::new();
        headers
            .set("Content-Type", "application/json")
            .map_err(transport_error)?;

        let mut init = RequestInit::new();
        init.with_method(Method::Post);
        init.with_body(Some(body.into()));
        init.with_headers(headers);

        worker::console_log!("[DEBUG] Calling Gemini model: {}", GEMINI_MODEL);

        let upstream = Request::new_with_init(&url, &init).map_err(transport_error)?;
        let mut response = Fetch::Request(upstream)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status_code();
        if !(200..300).contains(&status) {
            let error_text = response.text().await.unwrap_or_default();
            worker::console_error!("Gemini error {}: {}", status, error_text);
            return Err(jojigi::Error::Upstream {
                status,
                body: error_text,
            });
        }

        let response_text = response.text().await.map_err(transport_error)?;
        let parsed: GenerateContentResponse = serde_json::from_str(&response_text)?;

        Ok(GenerateResponse {
            text: parsed.first_text().map(str::to_string),
            model: parsed.model_version().map(str::to_string),
        })
    }
}

// ============ Helper Functions ============

fn api_key(env: &Env) -> Option<String> {
    config::resolve_api_key(|name| {
        env.secret(name)
            .map(|secret| secret.to_string())
            .or_else(|_| env.var(name).map(|var| var.to_string()))
            .ok()
    })
}

fn method_of(req: &Request) -> HttpMethod {
    HttpMethod::parse(&req.method().to_string())
}

fn into_worker_response(response: HandlerResponse) -> Result<Response> {
    let headers = Headers::new();
    for (name, value) in &response.headers {
        headers.set(name, value)?;
    }

    let out = match response.body {
        Some(body) => Response::ok(body)?,
        None => Response::empty()?,
    };

    Ok(out.with_status(response.status).with_headers(headers))
}

// ============ Main Handler ============

#[event(fetch)]
pub async fn main(mut req: Request, env: Env, _ctx: worker::Context) -> Result<Response> {
    if req.path() != RECOMMEND_PATH {
        return into_worker_response(HandlerResponse::not_found());
    }

    let method = method_of(&req);
    worker::console_log!("[DEBUG] {:?} {}", method, RECOMMEND_PATH);

    // Only POST bodies are read; an unreadable body falls back to defaults
    let body = if method == HttpMethod::Post {
        req.bytes().await.unwrap_or_default()
    } else {
        Vec::new()
    };

    let request = HandlerRequest::new(method, body);
    let key = api_key(&env);
    if key.is_none() && method == HttpMethod::Post {
        worker::console_error!("JOJIGI_API_KEY is not configured");
    }

    let response = handler::handle(&request, key.as_deref(), &FetchGeminiProvider).await;
    worker::console_log!("[DEBUG] responded {}", response.status);

    into_worker_response(response)
}
