//! One-time cookie consent banner

use std::collections::HashMap;

use tracing::debug;

/// Durable key holding the consent decision
pub const CONSENT_STORAGE_KEY: &str = "jojigi_cookie_consent";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentDecision {
    Accepted,
    Rejected,
}

impl ConsentDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentDecision::Accepted => "accepted",
            ConsentDecision::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "accepted" => Some(ConsentDecision::Accepted),
            "rejected" => Some(ConsentDecision::Rejected),
            _ => None,
        }
    }
}

/// Key-value storage that survives reloads (e.g. `localStorage`)
pub trait ConsentStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl ConsentStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Banner shown until a decision has been recorded
pub struct ConsentBanner<S: ConsentStore> {
    store: S,
    visible: bool,
}

impl<S: ConsentStore> ConsentBanner<S> {
    /// Read the stored decision once; an unrecognized value counts as none
    pub fn load(store: S) -> Self {
        let visible = store
            .get(CONSENT_STORAGE_KEY)
            .and_then(|v| ConsentDecision::parse(&v))
            .is_none();
        Self { store, visible }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn decision(&self) -> Option<ConsentDecision> {
        self.store
            .get(CONSENT_STORAGE_KEY)
            .and_then(|v| ConsentDecision::parse(&v))
    }

    pub fn accept(&mut self) {
        self.decide(ConsentDecision::Accepted);
    }

    pub fn reject(&mut self) {
        self.decide(ConsentDecision::Rejected);
    }

    fn decide(&mut self, decision: ConsentDecision) {
        debug!("consent decision: {}", decision.as_str());
        self.store.set(CONSENT_STORAGE_KEY, decision.as_str());
        self.visible = false;
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_shown_once() {
        let mut banner = ConsentBanner::load(MemoryStore::default());
        assert!(banner.is_visible());
        assert_eq!(banner.decision(), None);

        banner.reject();
        assert!(!banner.is_visible());
        assert_eq!(banner.decision(), Some(ConsentDecision::Rejected));

        // next visit
        let banner = ConsentBanner::load(banner.into_store());
        assert!(!banner.is_visible());
    }

    #[test]
    fn test_accept_is_recorded() {
        let mut banner = ConsentBanner::load(MemoryStore::default());
        banner.accept();
        let store = banner.into_store();
        assert_eq!(store.get(CONSENT_STORAGE_KEY).as_deref(), Some("accepted"));
    }

    #[test]
    fn test_garbage_value_shows_banner() {
        let mut store = MemoryStore::default();
        store.set(CONSENT_STORAGE_KEY, "maybe");
        assert!(ConsentBanner::load(store).is_visible());
    }
}
