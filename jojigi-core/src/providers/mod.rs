//! Provider abstraction layer for generative text services
//!
//! The handler talks to the upstream model only through `GenerativeProvider`.
mod gemini;
mod generative;

#[cfg(feature = "native")]
pub use gemini::GeminiProvider;
pub use gemini::{GeminiContent, GeminiPart, GenerateContentRequest, GenerateContentResponse};
pub use generative::{GenerateRequest, GenerateResponse, GenerativeProvider};
