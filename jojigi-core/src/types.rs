//! Core types used throughout Jojigi

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Target used when the request names none
pub const DEFAULT_TARGET: &str = "friend";

/// UI and output language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Ko,
    En,
}

impl Language {
    /// Parse a language code, falling back to Korean for anything unknown
    pub fn parse(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Language::En,
            _ => Language::Ko,
        }
    }

    /// Parse a language code, returning None for anything unknown
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ko" => Some(Language::Ko),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }

    /// The other language of the pair
    pub fn toggled(&self) -> Self {
        match self {
            Language::Ko => Language::En,
            Language::En => Language::Ko,
        }
    }

    /// Text returned when the model produced no candidate
    pub fn placeholder(&self) -> &'static str {
        match self {
            Language::Ko => "조지기 마스터가 잠시 자리를 비웠어. 다시 시도해봐!",
            Language::En => "The Prank Master stepped away for a moment. Try again!",
        }
    }
}

/// Thematic flavor of the prank
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    #[default]
    Classic,
    Trendy,
    Creative,
}

impl Style {
    /// Parse a style key, falling back to classic for anything unknown
    pub fn parse(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "trendy" => Style::Trendy,
            "creative" => Style::Creative,
            _ => Style::Classic,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Style::Classic => "classic",
            Style::Trendy => "trendy",
            Style::Creative => "creative",
        }
    }

    /// Description substituted into the prompt
    pub fn description(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (Style::Classic, Language::Ko) => {
                "오래 사랑받아 온 고전 장난을 살짝 비튼, 누구나 바로 이해하는 스타일"
            }
            (Style::Trendy, Language::Ko) => {
                "요즘 SNS 밈과 유행어, 최신 앱 문화를 활용한 트렌디한 스타일"
            }
            (Style::Creative, Language::Ko) => {
                "아무도 생각하지 못한 기발하고 엉뚱한 발상의 신박한 스타일"
            }
            (Style::Classic, Language::En) => {
                "a timeless classic prank with a fresh little twist that anyone gets instantly"
            }
            (Style::Trendy, Language::En) => {
                "a trendy prank built on current memes, slang, and app culture"
            }
            (Style::Creative, Language::En) => {
                "an original, off-the-wall idea nobody has thought of before"
            }
        }
    }

    pub fn all() -> &'static [Style] {
        &[Style::Classic, Style::Trendy, Style::Creative]
    }
}

/// How disruptive the prank is allowed to be
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    #[default]
    Mild,
    Medium,
    Spicy,
}

impl Intensity {
    /// Parse an intensity key, falling back to mild for anything unknown
    pub fn parse(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "medium" => Intensity::Medium,
            "spicy" => Intensity::Spicy,
            _ => Intensity::Mild,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Intensity::Mild => "mild",
            Intensity::Medium => "medium",
            Intensity::Spicy => "spicy",
        }
    }

    /// Description substituted into the prompt
    pub fn description(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (Intensity::Mild, Language::Ko) => {
                "착한맛: 상대가 바로 웃어넘길 수 있는 귀엽고 가벼운 수준"
            }
            (Intensity::Medium, Language::Ko) => {
                "중간맛: 잠깐 당황하지만 곧 빵 터지는 적당히 킹받는 수준"
            }
            (Intensity::Spicy, Language::Ko) => {
                "매운맛: 제대로 속았다고 느낄 만큼 대담하지만 선은 넘지 않는 수준"
            }
            (Intensity::Mild, Language::En) => {
                "Mild: cute and light, the target laughs it off right away"
            }
            (Intensity::Medium, Language::En) => {
                "Medium: a moment of confusion that quickly turns into a big laugh"
            }
            (Intensity::Spicy, Language::En) => {
                "Spicy: bold enough that they feel truly fooled, but never crossing the line"
            }
        }
    }

    pub fn all() -> &'static [Intensity] {
        &[Intensity::Mild, Intensity::Medium, Intensity::Spicy]
    }
}

/// Target keys offered by the UI, in display order
pub const TARGET_KEYS: &[&str] = &["friend", "coworker", "partner", "family"];

/// Localized label for a known target key, or the free text as given
pub fn target_label(target: &str, lang: Language) -> &str {
    match (target, lang) {
        ("friend", Language::Ko) => "친구",
        ("coworker", Language::Ko) => "직장동료",
        ("partner", Language::Ko) => "연인",
        ("family", Language::Ko) => "가족",
        ("friend", Language::En) => "friend",
        ("coworker", Language::En) => "coworker",
        ("partner", Language::En) => "partner",
        ("family", Language::En) => "family member",
        (other, _) => other,
    }
}

/// Parameters for one prank suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub target: String,
    pub style: Style,
    pub intensity: Intensity,
    pub language: Language,
}

impl Default for PromptRequest {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            style: Style::default(),
            intensity: Intensity::default(),
            language: Language::default(),
        }
    }
}

impl PromptRequest {
    /// Read parameters from a raw request body.
    ///
    /// A missing, malformed, or non-object body yields all defaults; each
    /// field is only taken when it is a string. `type` is accepted as an
    /// alias for `style`.
    pub fn from_body(body: &[u8]) -> Self {
        let value: Value = match serde_json::from_slice(body) {
            Ok(v) => v,
            Err(_) => return Self::default(),
        };
        let field = |name: &str| value.get(name).and_then(Value::as_str);

        let target = field("target")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TARGET)
            .to_string();

        Self {
            target,
            style: field("style")
                .or_else(|| field("type"))
                .map(Style::parse)
                .unwrap_or_default(),
            intensity: field("intensity").map(Intensity::parse).unwrap_or_default(),
            language: field("lang").map(Language::parse).unwrap_or_default(),
        }
    }

    /// Body sent to the recommend endpoint
    pub fn to_wire(&self) -> WireRequest<'_> {
        WireRequest {
            target: &self.target,
            style: self.style.key(),
            intensity: self.intensity.key(),
            lang: self.language.code(),
        }
    }
}

/// JSON body of a recommend request
#[derive(Debug, Serialize)]
pub struct WireRequest<'a> {
    pub target: &'a str,
    #[serde(rename = "type")]
    pub style: &'a str,
    pub intensity: &'a str,
    pub lang: &'a str,
}

/// JSON body of a recommend response; exactly one field is present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PromptResponse {
    Recommendation { recommendation: String },
    Error { error: String },
}

impl PromptResponse {
    pub fn recommendation(text: impl Into<String>) -> Self {
        Self::Recommendation {
            recommendation: text.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_keys_fall_back() {
        assert_eq!(Style::parse("vintage"), Style::Classic);
        assert_eq!(Intensity::parse("nuclear"), Intensity::Mild);
        assert_eq!(Language::parse("fr"), Language::Ko);
        assert_eq!(Style::parse(" Trendy "), Style::Trendy);
    }

    #[test]
    fn test_from_body_defaults() {
        assert_eq!(PromptRequest::from_body(b""), PromptRequest::default());
        assert_eq!(PromptRequest::from_body(b"{not json"), PromptRequest::default());
        assert_eq!(PromptRequest::from_body(b"[1,2]"), PromptRequest::default());
        assert_eq!(PromptRequest::from_body(b"{}"), PromptRequest::default());
    }

    #[test]
    fn test_from_body_reads_fields() {
        let req = PromptRequest::from_body(
            br#"{"target":"coworker","type":"creative","intensity":"spicy","lang":"en"}"#,
        );
        assert_eq!(req.target, "coworker");
        assert_eq!(req.style, Style::Creative);
        assert_eq!(req.intensity, Intensity::Spicy);
        assert_eq!(req.language, Language::En);
    }

    #[test]
    fn test_from_body_ignores_non_string_fields() {
        let req = PromptRequest::from_body(br#"{"target":42,"intensity":"medium","lang":null}"#);
        assert_eq!(req.target, DEFAULT_TARGET);
        assert_eq!(req.intensity, Intensity::Medium);
        assert_eq!(req.language, Language::Ko);
    }

    #[test]
    fn test_style_key_wins_over_type_alias() {
        let req = PromptRequest::from_body(br#"{"style":"trendy","type":"creative"}"#);
        assert_eq!(req.style, Style::Trendy);
    }

    #[test]
    fn test_blank_target_uses_default() {
        let req = PromptRequest::from_body(br#"{"target":"   "}"#);
        assert_eq!(req.target, DEFAULT_TARGET);
    }

    #[test]
    fn test_target_label() {
        assert_eq!(target_label("friend", Language::Ko), "친구");
        assert_eq!(target_label("my boss Kim", Language::Ko), "my boss Kim");
    }

    #[test]
    fn test_prompt_response_shape() {
        let ok = serde_json::to_string(&PromptResponse::recommendation("hi")).unwrap();
        assert_eq!(ok, r#"{"recommendation":"hi"}"#);
        let err = serde_json::to_string(&PromptResponse::error("boom")).unwrap();
        assert_eq!(err, r#"{"error":"boom"}"#);
    }

    #[test]
    fn test_wire_request_uses_type_field() {
        let wire = serde_json::to_value(PromptRequest::default().to_wire()).unwrap();
        assert_eq!(wire["type"], "classic");
        assert_eq!(wire["lang"], "ko");
        assert_eq!(wire["target"], "friend");
    }
}
