//! # Screen Navigator
//!
//! Maps start commands and button presses to the screen that should be
//! rendered next. No per-user state is kept: the current screen is implied
//! by the buttons the user last saw, and the start command always resets to
//! language selection.
//!
//! ```text
//! LanguageSelect --lang_<lang>--> LanguageMenu(lang) --<topic>_<lang>--> ContentLeaf(lang, topic)
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use teloxide::types::InlineKeyboardMarkup;

use crate::bot::ui_builder::{create_language_keyboard, create_topic_keyboard};
use crate::content::{ContentTable, Language, Topic};
use crate::errors::BotError;

/// Prefix of language selection button identifiers
pub const LANGUAGE_PREFIX: &str = "lang";

/// Screens a user can be looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    LanguageSelect,
    LanguageMenu(Language),
    /// Terminal screen, rendered without buttons
    ContentLeaf(Language, Topic),
}

/// Decoded button identifier
///
/// Identifiers are `lang_<lang>` and `<topic>_<lang>`; anything else is
/// rejected as [`BotError::UnroutableEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    SelectLanguage(Language),
    ShowTopic(Topic, Language),
}

impl fmt::Display for CallbackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackAction::SelectLanguage(language) => write!(f, "{LANGUAGE_PREFIX}_{language}"),
            CallbackAction::ShowTopic(topic, language) => write!(f, "{topic}_{language}"),
        }
    }
}

impl FromStr for CallbackAction {
    type Err = BotError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let unroutable = || BotError::UnroutableEvent(data.to_string());

        let (head, code) = data.split_once('_').ok_or_else(unroutable)?;
        let language = Language::from_code(code).ok_or_else(unroutable)?;

        if head == LANGUAGE_PREFIX {
            return Ok(CallbackAction::SelectLanguage(language));
        }

        Topic::from_code(head)
            .map(|topic| CallbackAction::ShowTopic(topic, language))
            .ok_or_else(unroutable)
    }
}

/// What to show the user: replacement text plus the optional button set
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenView {
    pub screen: Screen,
    pub text: String,
    pub keyboard: Option<InlineKeyboardMarkup>,
}

/// Renders screens from the content table and prebuilt keyboards
#[derive(Debug, Clone)]
pub struct Navigator {
    content: ContentTable,
    language_keyboard: InlineKeyboardMarkup,
    topic_keyboards: HashMap<Language, InlineKeyboardMarkup>,
}

impl Navigator {
    pub fn new(content: ContentTable) -> Self {
        let language_keyboard = create_language_keyboard(&content);
        let topic_keyboards = Language::ALL
            .into_iter()
            .map(|language| (language, create_topic_keyboard(&content, language)))
            .collect();

        Self {
            content,
            language_keyboard,
            topic_keyboards,
        }
    }

    pub fn content(&self) -> &ContentTable {
        &self.content
    }

    /// Greeting with the language picker. Always the same, whatever the user saw before.
    pub fn on_start(&self) -> ScreenView {
        ScreenView {
            screen: Screen::LanguageSelect,
            text: self.content.greeting().to_string(),
            keyboard: Some(self.language_keyboard.clone()),
        }
    }

    pub fn on_language_selected(&self, language: Language) -> ScreenView {
        ScreenView {
            screen: Screen::LanguageMenu(language),
            text: self.content.prompt(language).to_string(),
            keyboard: self.topic_keyboards.get(&language).cloned(),
        }
    }

    pub fn on_topic_selected(&self, topic: Topic, language: Language) -> ScreenView {
        ScreenView {
            screen: Screen::ContentLeaf(language, topic),
            text: self.content.text(language, topic).to_string(),
            keyboard: None,
        }
    }

    pub fn navigate(&self, action: CallbackAction) -> ScreenView {
        match action {
            CallbackAction::SelectLanguage(language) => self.on_language_selected(language),
            CallbackAction::ShowTopic(topic, language) => self.on_topic_selected(topic, language),
        }
    }

    /// Decode raw callback data and render the screen it points to
    pub fn route(&self, data: &str) -> Result<ScreenView, BotError> {
        let action: CallbackAction = data.parse()?;
        Ok(self.navigate(action))
    }
}
