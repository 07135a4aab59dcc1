//! Share links, clipboard copy, and native share sheet fallback

use tracing::{debug, warn};

use crate::error::Result;
use crate::types::Language;

use super::i18n::{DocumentMeta, TextKey, translate};

/// Canonical page URL carrying `lang`, with any previous query or fragment dropped
pub fn share_url(base: &str, lang: Language) -> String {
    let end = base.find(['?', '#']).unwrap_or(base.len());
    format!("{}?lang={}", &base[..end], lang.code())
}

/// Data handed to a share target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn new(base: &str, lang: Language) -> Self {
        Self {
            title: DocumentMeta::for_language(lang).title.to_string(),
            text: translate(lang, TextKey::ShareText).to_string(),
            url: share_url(base, lang),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    X,
    Facebook,
}

impl SocialPlatform {
    /// Share intent URL for `payload`
    pub fn intent_url(&self, payload: &SharePayload) -> String {
        match self {
            SocialPlatform::X => format!(
                "https://twitter.com/intent/tweet?text={}&url={}",
                urlencoding::encode(&payload.text),
                urlencoding::encode(&payload.url)
            ),
            SocialPlatform::Facebook => format!(
                "https://www.facebook.com/sharer/sharer.php?u={}",
                urlencoding::encode(&payload.url)
            ),
        }
    }
}

pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Platform share sheet (e.g. `navigator.share`)
pub trait ShareSheet {
    fn share(&self, payload: &SharePayload) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied { confirmation: &'static str },
}

/// Copy the share URL and return the localized confirmation
pub fn copy_link(
    clipboard: &dyn Clipboard,
    payload: &SharePayload,
    lang: Language,
) -> Result<&'static str> {
    clipboard.write_text(&payload.url)?;
    debug!("copied share link {}", payload.url);
    Ok(translate(lang, TextKey::CopyDone))
}

/// Use the share sheet when there is one, otherwise fall back to copying
pub fn share_or_copy(
    sheet: Option<&dyn ShareSheet>,
    clipboard: &dyn Clipboard,
    payload: &SharePayload,
    lang: Language,
) -> Result<ShareOutcome> {
    if let Some(sheet) = sheet {
        match sheet.share(payload) {
            Ok(()) => return Ok(ShareOutcome::Shared),
            Err(e) => warn!("share sheet failed, falling back to copy: {}", e),
        }
    }
    let confirmation = copy_link(clipboard, payload, lang)?;
    Ok(ShareOutcome::Copied { confirmation })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::Error;

    #[derive(Default)]
    struct RecordingClipboard {
        written: RefCell<Vec<String>>,
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&self, text: &str) -> Result<()> {
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct FailingSheet;

    impl ShareSheet for FailingSheet {
        fn share(&self, _payload: &SharePayload) -> Result<()> {
            Err(Error::Transport("AbortError".into()))
        }
    }

    struct OkSheet;

    impl ShareSheet for OkSheet {
        fn share(&self, _payload: &SharePayload) -> Result<()> {
            Ok(())
        }
    }

    const BASE: &str = "https://jojigi.pages.dev/";

    #[test]
    fn test_share_url_replaces_query() {
        assert_eq!(share_url(BASE, Language::En), "https://jojigi.pages.dev/?lang=en");
        assert_eq!(
            share_url("https://jojigi.pages.dev/?lang=en#top", Language::Ko),
            "https://jojigi.pages.dev/?lang=ko"
        );
    }

    #[test]
    fn test_intent_urls_are_encoded() {
        let payload = SharePayload::new(BASE, Language::En);
        let x = SocialPlatform::X.intent_url(&payload);
        assert!(x.starts_with("https://twitter.com/intent/tweet?text=Get%20an%20AI"));
        assert!(x.ends_with("&url=https%3A%2F%2Fjojigi.pages.dev%2F%3Flang%3Den"));

        let fb = SocialPlatform::Facebook.intent_url(&payload);
        assert_eq!(
            fb,
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fjojigi.pages.dev%2F%3Flang%3Den"
        );
    }

    #[test]
    fn test_share_without_sheet_copies() {
        let clipboard = RecordingClipboard::default();
        let payload = SharePayload::new(BASE, Language::Ko);
        let outcome = share_or_copy(None, &clipboard, &payload, Language::Ko).unwrap();
        assert_eq!(
            outcome,
            ShareOutcome::Copied {
                confirmation: translate(Language::Ko, TextKey::CopyDone)
            }
        );
        assert_eq!(
            clipboard.written.borrow().as_slice(),
            ["https://jojigi.pages.dev/?lang=ko"]
        );
    }

    #[test]
    fn test_failed_sheet_falls_back() {
        let clipboard = RecordingClipboard::default();
        let payload = SharePayload::new(BASE, Language::En);
        let outcome = share_or_copy(Some(&FailingSheet), &clipboard, &payload, Language::En).unwrap();
        assert!(matches!(outcome, ShareOutcome::Copied { .. }));
        assert_eq!(clipboard.written.borrow().len(), 1);
    }

    #[test]
    fn test_working_sheet_does_not_copy() {
        let clipboard = RecordingClipboard::default();
        let payload = SharePayload::new(BASE, Language::En);
        let outcome = share_or_copy(Some(&OkSheet), &clipboard, &payload, Language::En).unwrap();
        assert_eq!(outcome, ShareOutcome::Shared);
        assert!(clipboard.written.borrow().is_empty());
    }
}
