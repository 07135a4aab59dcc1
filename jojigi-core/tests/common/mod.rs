#![allow(dead_code)]

use std::cell::RefCell;

use async_trait::async_trait;
use jojigi::{Error, GenerateRequest, GenerateResponse, GenerativeProvider, Result};

pub fn setup_logger(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// What the stub upstream answers with
#[derive(Debug, Clone)]
pub enum StubReply {
    Text(&'static str),
    NoCandidates,
    Status(u16, &'static str),
    NetworkDown,
}

/// Provider that records every request instead of calling Gemini
pub struct StubProvider {
    reply: StubReply,
    calls: RefCell<Vec<GenerateRequest>>,
}

impl StubProvider {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last_prompt(&self) -> String {
        self.calls
            .borrow()
            .last()
            .map(|c| c.prompt.clone())
            .expect("stub was never called")
    }

    pub fn last_api_key(&self) -> String {
        self.calls
            .borrow()
            .last()
            .map(|c| c.api_key.clone())
            .expect("stub was never called")
    }
}

#[async_trait(?Send)]
impl GenerativeProvider for StubProvider {
    fn name(&self) -> &'static str {
        "Stub"
    }

    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        self.calls.borrow_mut().push(request);
        match &self.reply {
            StubReply::Text(text) => Ok(GenerateResponse {
                text: Some(text.to_string()),
                model: Some("stub".to_string()),
            }),
            StubReply::NoCandidates => Ok(GenerateResponse::default()),
            StubReply::Status(status, body) => Err(Error::Upstream {
                status: *status,
                body: body.to_string(),
            }),
            StubReply::NetworkDown => Err(Error::Transport("connection reset".to_string())),
        }
    }
}
