//! Jojigi Core - AI prank recommendations
//!
//! The recommend handler composes a localized prompt from the request
//! parameters and asks a generative provider (Gemini) for one prank plan.
//! The client module models the browser UI that calls it.

pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod prompt;
pub mod providers;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

/// Re-export the main components for convenience
pub use client::{ClientController, RecommendApi, UiAction, UiState};
pub use handler::{HandlerRequest, HandlerResponse, HttpMethod, handle, recommend};
pub use prompt::build_prompt;
pub use providers::{GenerateRequest, GenerateResponse, GenerativeProvider};
