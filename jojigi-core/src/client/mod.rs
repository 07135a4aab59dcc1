//! Browser-side controller
//!
//! UI state lives in an immutable `UiState` that is replaced by one reducer
//! transition per user action. A binding layer paints `render()` output and
//! forwards events; nothing here depends on a particular UI technology.

mod api;
mod consent;
mod i18n;
mod share;
mod state;

pub use api::{RecommendApi, UNKNOWN_ERROR};
#[cfg(feature = "native")]
pub use api::HttpRecommendApi;
pub use consent::{CONSENT_STORAGE_KEY, ConsentBanner, ConsentDecision, ConsentStore, MemoryStore};
pub use i18n::{DocumentMeta, TextKey, translate};
pub use share::{
    Clipboard, ShareOutcome, SharePayload, ShareSheet, SocialPlatform, copy_link, share_or_copy,
    share_url,
};
pub use state::{
    GroupView, OptionView, Output, OutputView, SelectionGroup, UiAction, UiState, View,
};

use tracing::debug;

use crate::error::Result;
use crate::types::{Language, PromptRequest};

/// Initial language: explicit `?lang=` wins, then the browser locale, then Korean
pub fn initial_language(query_lang: Option<&str>, locale: Option<&str>) -> Language {
    if let Some(lang) = query_lang.and_then(Language::from_code) {
        return lang;
    }
    match locale {
        Some(locale) if locale.to_ascii_lowercase().starts_with("ko") => Language::Ko,
        Some(_) => Language::En,
        None => Language::Ko,
    }
}

/// Owns the current `UiState` and applies transitions to it
pub struct ClientController {
    state: UiState,
}

impl ClientController {
    /// Page-load state
    pub fn load(query_lang: Option<&str>, locale: Option<&str>) -> Self {
        let language = initial_language(query_lang, locale);
        debug!("client loaded with language {}", language.code());
        Self {
            state: UiState::new(language),
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn dispatch(&mut self, action: UiAction) {
        self.state = self.state.reduce(action);
    }

    pub fn select(&mut self, group: SelectionGroup, value: impl Into<String>) {
        self.dispatch(UiAction::Select {
            group,
            value: value.into(),
        });
    }

    pub fn toggle_language(&mut self) {
        self.dispatch(UiAction::ToggleLanguage);
    }

    pub fn render(&self) -> View {
        self.state.render()
    }

    /// Query string reflecting the active language, for the address bar
    pub fn location_query(&self) -> String {
        format!("?lang={}", self.state.language.code())
    }

    pub fn share_payload(&self, base: &str) -> SharePayload {
        SharePayload::new(base, self.state.language)
    }

    /// Enter the loading state and return the parameters to send.
    ///
    /// Returns None while a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<PromptRequest> {
        if !self.state.submit_enabled {
            return None;
        }
        self.dispatch(UiAction::SubmitStarted);
        Some(self.state.prompt_request())
    }

    /// Leave the loading state with the endpoint's outcome
    pub fn finish_submit(&mut self, outcome: Result<String>) {
        match outcome {
            Ok(text) => self.dispatch(UiAction::SubmitSucceeded(text)),
            Err(err) => self.dispatch(UiAction::SubmitFailed(err.to_string())),
        }
    }

    /// Run one generation (initial or retry). Returns false if one was already running.
    pub async fn submit<A>(&mut self, api: &A) -> bool
    where
        A: RecommendApi + ?Sized,
    {
        let Some(request) = self.begin_submit() else {
            return false;
        };
        let outcome = api.recommend(&request).await;
        self.finish_submit(outcome);
        true
    }
}
