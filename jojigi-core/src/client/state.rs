//! UI state and reducer

use crate::types::{DEFAULT_TARGET, Intensity, Language, PromptRequest, Style, TARGET_KEYS};

use super::i18n::{DocumentMeta, TextKey, translate};

/// Single-choice option groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionGroup {
    Target,
    Style,
    Intensity,
}

impl SelectionGroup {
    /// Option values in display order
    pub fn values(&self) -> Vec<&'static str> {
        match self {
            SelectionGroup::Target => TARGET_KEYS.to_vec(),
            SelectionGroup::Style => Style::all().iter().map(Style::key).collect(),
            SelectionGroup::Intensity => Intensity::all().iter().map(Intensity::key).collect(),
        }
    }
}

/// Contents of the result pane
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Output {
    #[default]
    Empty,
    /// Model text, rendered as plain text content
    Recommendation(String),
    Error(String),
}

/// One user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Select { group: SelectionGroup, value: String },
    ToggleLanguage,
    SetLanguage(Language),
    SubmitStarted,
    SubmitSucceeded(String),
    SubmitFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub target: String,
    pub style: Style,
    pub intensity: Intensity,
    pub language: Language,
    pub loading: bool,
    pub submit_enabled: bool,
    pub result_visible: bool,
    pub retry_visible: bool,
    pub share_visible: bool,
    pub output: Output,
}

impl UiState {
    pub fn new(language: Language) -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            style: Style::default(),
            intensity: Intensity::default(),
            language,
            loading: false,
            submit_enabled: true,
            result_visible: false,
            retry_visible: false,
            share_visible: false,
            output: Output::Empty,
        }
    }

    /// Next state after `action`
    pub fn reduce(&self, action: UiAction) -> Self {
        let mut next = self.clone();
        match action {
            UiAction::Select { group, value } => match group {
                SelectionGroup::Target => {
                    let value = value.trim();
                    next.target = if value.is_empty() {
                        DEFAULT_TARGET.to_string()
                    } else {
                        value.to_string()
                    };
                }
                SelectionGroup::Style => next.style = Style::parse(&value),
                SelectionGroup::Intensity => next.intensity = Intensity::parse(&value),
            },
            UiAction::ToggleLanguage => next.language = self.language.toggled(),
            UiAction::SetLanguage(lang) => next.language = lang,
            UiAction::SubmitStarted => {
                next.loading = true;
                next.submit_enabled = false;
                next.result_visible = true;
                next.retry_visible = false;
                next.share_visible = false;
                next.output = Output::Empty;
            }
            UiAction::SubmitSucceeded(text) => {
                next.loading = false;
                next.submit_enabled = true;
                next.retry_visible = true;
                next.share_visible = true;
                next.output = Output::Recommendation(text);
            }
            UiAction::SubmitFailed(message) => {
                next.loading = false;
                next.submit_enabled = true;
                next.output = Output::Error(message);
            }
        }
        next
    }

    /// Selected value of `group`
    pub fn selected(&self, group: SelectionGroup) -> &str {
        match group {
            SelectionGroup::Target => &self.target,
            SelectionGroup::Style => self.style.key(),
            SelectionGroup::Intensity => self.intensity.key(),
        }
    }

    pub fn is_active(&self, group: SelectionGroup, value: &str) -> bool {
        self.selected(group) == value
    }

    /// Parameters sent on submit
    pub fn prompt_request(&self) -> PromptRequest {
        PromptRequest {
            target: self.target.clone(),
            style: self.style,
            intensity: self.intensity,
            language: self.language,
        }
    }

    pub fn render(&self) -> View {
        let lang = self.language;
        let groups = [
            SelectionGroup::Target,
            SelectionGroup::Style,
            SelectionGroup::Intensity,
        ]
        .into_iter()
        .map(|group| GroupView {
            group,
            options: group
                .values()
                .into_iter()
                .map(|value| OptionView {
                    value,
                    label: TextKey::from_name(value)
                        .map(|key| translate(lang, key))
                        .unwrap_or(value),
                    active: self.is_active(group, value),
                })
                .collect(),
        })
        .collect();

        let output = match &self.output {
            Output::Empty => OutputView::Empty,
            Output::Recommendation(text) => OutputView::Text(text.clone()),
            Output::Error(message) => OutputView::ErrorBanner {
                title: translate(lang, TextKey::ErrorTitle),
                message: message.clone(),
            },
        };

        View {
            texts: TextKey::ALL
                .iter()
                .map(|&key| (key, translate(lang, key)))
                .collect(),
            meta: DocumentMeta::for_language(lang),
            groups,
            submit_enabled: self.submit_enabled,
            loading_visible: self.loading,
            result_visible: self.result_visible,
            retry_visible: self.retry_visible,
            share_visible: self.share_visible,
            output,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView {
    pub group: SelectionGroup,
    pub options: Vec<OptionView>,
}

impl GroupView {
    pub fn active_values(&self) -> Vec<&'static str> {
        self.options
            .iter()
            .filter(|o| o.active)
            .map(|o| o.value)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputView {
    Empty,
    Text(String),
    ErrorBanner { title: &'static str, message: String },
}

/// Everything a binding layer needs to paint the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub texts: Vec<(TextKey, &'static str)>,
    pub meta: DocumentMeta,
    pub groups: Vec<GroupView>,
    pub submit_enabled: bool,
    pub loading_visible: bool,
    pub result_visible: bool,
    pub retry_visible: bool,
    pub share_visible: bool,
    pub output: OutputView,
}

impl View {
    pub fn text(&self, key: TextKey) -> Option<&'static str> {
        self.texts.iter().find(|(k, _)| *k == key).map(|(_, t)| *t)
    }

    pub fn group(&self, group: SelectionGroup) -> Option<&GroupView> {
        self.groups.iter().find(|g| g.group == group)
    }
}
