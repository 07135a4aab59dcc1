//! Client controller flows against a stub recommend endpoint

use std::cell::RefCell;

use async_trait::async_trait;
use jojigi::client::{
    ClientController, OutputView, RecommendApi, SelectionGroup, TextKey, translate,
};
use jojigi::{Error, Language, PromptRequest, Result};

struct StubApi {
    reply: std::result::Result<&'static str, &'static str>,
    seen: RefCell<Vec<PromptRequest>>,
}

impl StubApi {
    fn ok(text: &'static str) -> Self {
        Self {
            reply: Ok(text),
            seen: RefCell::new(Vec::new()),
        }
    }

    fn failing(message: &'static str) -> Self {
        Self {
            reply: Err(message),
            seen: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl RecommendApi for StubApi {
    async fn recommend(&self, request: &PromptRequest) -> Result<String> {
        self.seen.borrow_mut().push(request.clone());
        self.reply
            .map(str::to_string)
            .map_err(|m| Error::Api(m.to_string()))
    }
}

#[tokio::test]
async fn test_generate_then_retry() {
    let api = StubApi::ok("Operation: Upside-down Keyboard");
    let mut controller = ClientController::load(None, Some("ko-KR"));

    controller.select(SelectionGroup::Target, "partner");
    controller.select(SelectionGroup::Intensity, "medium");

    assert!(controller.submit(&api).await);
    let view = controller.render();
    assert!(view.submit_enabled);
    assert!(!view.loading_visible);
    assert!(view.retry_visible);
    assert!(view.share_visible);
    assert_eq!(
        view.output,
        OutputView::Text("Operation: Upside-down Keyboard".to_string())
    );

    // retry sends a fresh, identical request
    assert!(controller.submit(&api).await);
    let seen = api.seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], seen[1]);
    assert_eq!(seen[0].target, "partner");
    assert_eq!(seen[0].language, Language::Ko);
}

#[tokio::test]
async fn test_failure_shows_localized_banner_and_reenables() {
    let api = StubApi::failing("Gemini API Error: 429 - quota");
    let mut controller = ClientController::load(Some("en"), None);

    assert!(controller.submit(&api).await);
    let view = controller.render();
    assert!(view.submit_enabled);
    assert!(!view.loading_visible);
    assert!(!view.retry_visible);
    assert_eq!(
        view.output,
        OutputView::ErrorBanner {
            title: translate(Language::En, TextKey::ErrorTitle),
            message: "Gemini API Error: 429 - quota".to_string(),
        }
    );
}

#[tokio::test]
async fn test_submit_refused_while_in_flight() {
    let api = StubApi::ok("x");
    let mut controller = ClientController::load(None, None);

    let _pending = controller.begin_submit().unwrap();
    assert!(!controller.submit(&api).await);
    assert!(api.seen.borrow().is_empty());

    controller.finish_submit(Ok("done".to_string()));
    assert!(controller.submit(&api).await);
}

#[test]
fn test_language_toggle_without_reload() {
    let mut controller = ClientController::load(None, None);
    controller.select(SelectionGroup::Style, "trendy");

    let before = controller.render();
    controller.toggle_language();
    let after = controller.render();

    assert_eq!(before.text(TextKey::HeaderTitle), Some("노잼 탈출! 조지기 마스터"));
    assert_eq!(after.text(TextKey::HeaderTitle), Some("Escape Boredom! Prank Master"));
    assert_ne!(before.meta, after.meta);
    assert_eq!(controller.state().style.key(), "trendy");
}
