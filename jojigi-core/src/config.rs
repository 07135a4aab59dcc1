//! Upstream constants and API key resolution

/// Gemini REST base URL
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Gemini API version segment
pub const GEMINI_API_VERSION: &str = "v1beta";

/// Model that writes every recommendation
pub const GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Name of the secret holding the Gemini API key
pub const API_KEY_VAR: &str = "JOJIGI_API_KEY";

/// Path served by the recommend handler
pub const RECOMMEND_PATH: &str = "/api/recommend";

/// Operator-facing message when the API key is missing
pub const MISSING_KEY_MESSAGE: &str = "API Key 미설정: Cloudflare 대시보드의 'Settings > Functions > Environment variables'에 JOJIGI_API_KEY를 등록했는지 확인해주세요. (Production/Preview 모두 등록 권장)";

/// Resolve the API key through `lookup`, treating blank values as absent
pub fn resolve_api_key<F>(lookup: F) -> Option<String>
where
    F: FnOnce(&str) -> Option<String>,
{
    lookup(API_KEY_VAR)
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

/// Resolve the API key from the process environment
pub fn api_key_from_env() -> Option<String> {
    resolve_api_key(|name| std::env::var(name).ok())
}

/// Full generateContent URL for `model`, with the key as query parameter
pub fn generate_content_url(base: &str, model: &str, api_key: &str) -> String {
    format!(
        "{}/{}/models/{}:generateContent?key={}",
        base.trim_end_matches('/'),
        GEMINI_API_VERSION,
        model,
        urlencoding::encode(api_key)
    )
}
