//! UI Builder module for creating keyboards

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::content::{ContentTable, Language, Topic};
use crate::navigator::CallbackAction;

/// Buttons per row in the topic menu
pub const KEYBOARD_ROW_WIDTH: usize = 2;

/// Create the language picker: one button per language on a single row
pub fn create_language_keyboard(content: &ContentTable) -> InlineKeyboardMarkup {
    let row: Vec<InlineKeyboardButton> = Language::ALL
        .into_iter()
        .map(|language| {
            InlineKeyboardButton::callback(
                content.language_name(language),
                CallbackAction::SelectLanguage(language).to_string(),
            )
        })
        .collect();

    InlineKeyboardMarkup::new(vec![row])
}

/// Create the topic menu for a language, labelled in that language
pub fn create_topic_keyboard(content: &ContentTable, language: Language) -> InlineKeyboardMarkup {
    let buttons: Vec<InlineKeyboardButton> = Topic::ALL
        .into_iter()
        .map(|topic| {
            InlineKeyboardButton::callback(
                content.label(language, topic),
                CallbackAction::ShowTopic(topic, language).to_string(),
            )
        })
        .collect();

    InlineKeyboardMarkup::new(buttons.chunks(KEYBOARD_ROW_WIDTH).map(<[_]>::to_vec))
}
