//! Translation tables for the browser UI

use crate::types::Language;

/// Every string the UI binds through a `data-t` key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    HeaderTitle,
    HeaderDesc,
    TargetTitle,
    TypeTitle,
    IntensityTitle,
    RecommendBtn,
    ResultTitle,
    LoadingText,
    RetryBtn,
    ErrorTitle,
    Friend,
    Coworker,
    Partner,
    Family,
    Classic,
    Trendy,
    Creative,
    Mild,
    Medium,
    Spicy,
    LangBtn,
    ShareBtn,
    CopyBtn,
    CopyDone,
    ShareText,
    ConsentAccept,
    ConsentReject,
    PrivacyLink,
}

impl TextKey {
    pub const ALL: [TextKey; 28] = [
        TextKey::HeaderTitle,
        TextKey::HeaderDesc,
        TextKey::TargetTitle,
        TextKey::TypeTitle,
        TextKey::IntensityTitle,
        TextKey::RecommendBtn,
        TextKey::ResultTitle,
        TextKey::LoadingText,
        TextKey::RetryBtn,
        TextKey::ErrorTitle,
        TextKey::Friend,
        TextKey::Coworker,
        TextKey::Partner,
        TextKey::Family,
        TextKey::Classic,
        TextKey::Trendy,
        TextKey::Creative,
        TextKey::Mild,
        TextKey::Medium,
        TextKey::Spicy,
        TextKey::LangBtn,
        TextKey::ShareBtn,
        TextKey::CopyBtn,
        TextKey::CopyDone,
        TextKey::ShareText,
        TextKey::ConsentAccept,
        TextKey::ConsentReject,
        TextKey::PrivacyLink,
    ];

    /// Binding name used in markup
    pub fn name(&self) -> &'static str {
        match self {
            TextKey::HeaderTitle => "headerTitle",
            TextKey::HeaderDesc => "headerDesc",
            TextKey::TargetTitle => "targetTitle",
            TextKey::TypeTitle => "typeTitle",
            TextKey::IntensityTitle => "intensityTitle",
            TextKey::RecommendBtn => "recommendBtn",
            TextKey::ResultTitle => "resultTitle",
            TextKey::LoadingText => "loadingText",
            TextKey::RetryBtn => "retryBtn",
            TextKey::ErrorTitle => "errorTitle",
            TextKey::Friend => "friend",
            TextKey::Coworker => "coworker",
            TextKey::Partner => "partner",
            TextKey::Family => "family",
            TextKey::Classic => "classic",
            TextKey::Trendy => "trendy",
            TextKey::Creative => "creative",
            TextKey::Mild => "mild",
            TextKey::Medium => "medium",
            TextKey::Spicy => "spicy",
            TextKey::LangBtn => "langBtn",
            TextKey::ShareBtn => "shareBtn",
            TextKey::CopyBtn => "copyBtn",
            TextKey::CopyDone => "copyDone",
            TextKey::ShareText => "shareText",
            TextKey::ConsentAccept => "consentAccept",
            TextKey::ConsentReject => "consentReject",
            TextKey::PrivacyLink => "privacyLink",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.name() == name)
    }
}

/// Look up the string for `key` in `lang`'s table
pub fn translate(lang: Language, key: TextKey) -> &'static str {
    match lang {
        Language::Ko => ko(key),
        Language::En => en(key),
    }
}

fn ko(key: TextKey) -> &'static str {
    match key {
        TextKey::HeaderTitle => "노잼 탈출! 조지기 마스터",
        TextKey::HeaderDesc => {
            "지루한 일상에 매운맛 한 스푼!\n(*'조지다'는 '장난치다'의 유쾌한 표현입니다)"
        }
        TextKey::TargetTitle => "🎯 누구를 조질까?",
        TextKey::TypeTitle => "✨ 장난 스타일",
        TextKey::IntensityTitle => "🔥 장난 강도 (매운맛)",
        TextKey::RecommendBtn => "장난 설계 시작하기",
        TextKey::ResultTitle => "📜 조지기 작전 계획서",
        TextKey::LoadingText => "상황 분석 중... (사악한 웃음)",
        TextKey::RetryBtn => "다른 작전 줘",
        TextKey::ErrorTitle => "⚠️ 작전 수립 실패!",
        TextKey::Friend => "친구",
        TextKey::Coworker => "직장동료",
        TextKey::Partner => "연인",
        TextKey::Family => "가족",
        TextKey::Classic => "📜 클래식",
        TextKey::Trendy => "🚀 요즘 유행",
        TextKey::Creative => "💡 신박한",
        TextKey::Mild => "😇 착한맛",
        TextKey::Medium => "😏 중간맛",
        TextKey::Spicy => "🥵 매운맛",
        TextKey::LangBtn => "🇺🇸 English",
        TextKey::ShareBtn => "📤 공유하기",
        TextKey::CopyBtn => "🔗 링크 복사",
        TextKey::CopyDone => "링크가 복사되었어요! 친구에게 보내보세요.",
        TextKey::ShareText => "AI가 설계해주는 킹받는 장난, 조지기 마스터에서 받아보세요!",
        TextKey::ConsentAccept => "동의",
        TextKey::ConsentReject => "거부",
        TextKey::PrivacyLink => "개인정보처리방침",
    }
}

fn en(key: TextKey) -> &'static str {
    match key {
        TextKey::HeaderTitle => "Escape Boredom! Prank Master",
        TextKey::HeaderDesc => "Add a spoonful of spice to your boring daily life!",
        TextKey::TargetTitle => "🎯 Who is the target?",
        TextKey::TypeTitle => "✨ Prank Style",
        TextKey::IntensityTitle => "🔥 Intensity Level",
        TextKey::RecommendBtn => "Generate Prank Plan",
        TextKey::ResultTitle => "📜 The Master Plan",
        TextKey::LoadingText => "Analyzing situation... (Evil laugh)",
        TextKey::RetryBtn => "Give me another one",
        TextKey::ErrorTitle => "⚠️ Mission Failed!",
        TextKey::Friend => "Friend",
        TextKey::Coworker => "Coworker",
        TextKey::Partner => "Partner",
        TextKey::Family => "Family",
        TextKey::Classic => "📜 Classic",
        TextKey::Trendy => "🚀 Trendy",
        TextKey::Creative => "💡 Creative",
        TextKey::Mild => "😇 Mild",
        TextKey::Medium => "😏 Medium",
        TextKey::Spicy => "🥵 Spicy",
        TextKey::LangBtn => "🇰🇷 한국어",
        TextKey::ShareBtn => "📤 Share",
        TextKey::CopyBtn => "🔗 Copy link",
        TextKey::CopyDone => "Link copied! Send it to a friend.",
        TextKey::ShareText => "Get an AI-designed prank plan from the Prank Master!",
        TextKey::ConsentAccept => "Accept",
        TextKey::ConsentReject => "Decline",
        TextKey::PrivacyLink => "Privacy Policy",
    }
}

/// Page metadata used for the title and link previews
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentMeta {
    pub title: &'static str,
    pub description: &'static str,
}

impl DocumentMeta {
    pub fn for_language(lang: Language) -> Self {
        match lang {
            Language::Ko => Self {
                title: "조지기 마스터 - AI 장난 추천기",
                description: "친구, 직장동료, 연인, 가족에게 할 수 있는 무해하고 웃긴 장난을 AI가 설계해드려요.",
            },
            Language::En => Self {
                title: "Prank Master - AI Prank Generator",
                description: "Let AI design a harmless, hilarious prank for your friend, coworker, partner, or family.",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for key in TextKey::ALL {
            assert_eq!(TextKey::from_name(key.name()), Some(key));
        }
        assert_eq!(TextKey::from_name("nope"), None);
    }

    #[test]
    fn test_tables_differ() {
        assert_ne!(
            translate(Language::Ko, TextKey::RecommendBtn),
            translate(Language::En, TextKey::RecommendBtn)
        );
        assert_eq!(translate(Language::En, TextKey::ErrorTitle), "⚠️ Mission Failed!");
    }
}
