//! # Navigator Tests
//!
//! Screen rendering for every navigation step, checked against the
//! embedded content table.

use coffee_perk_bot::content::{ContentTable, Language, Topic};
use coffee_perk_bot::errors::BotError;
use coffee_perk_bot::navigator::{Navigator, Screen};
use teloxide::types::{InlineKeyboardButtonKind, InlineKeyboardMarkup};

fn setup_navigator() -> Navigator {
    let content = ContentTable::from_embedded().expect("Failed to load content table");
    Navigator::new(content)
}

fn button_ids(keyboard: &InlineKeyboardMarkup) -> Vec<String> {
    keyboard
        .inline_keyboard
        .iter()
        .flatten()
        .filter_map(|button| match &button.kind {
            InlineKeyboardButtonKind::CallbackData(data) => Some(data.clone()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_offers_two_languages_in_order() {
        let navigator = setup_navigator();
        let view = navigator.on_start();

        assert_eq!(view.screen, Screen::LanguageSelect);
        let keyboard = view.keyboard.expect("Start screen should have buttons");
        assert_eq!(button_ids(&keyboard), vec!["lang_cz", "lang_en"]);

        let InlineKeyboardMarkup {
            inline_keyboard: rows,
        } = keyboard;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0].text, "🇨🇿 Čeština");
        assert_eq!(rows[0][1].text, "🌍 English");
    }

    #[test]
    fn test_start_greeting_is_bilingual() {
        let navigator = setup_navigator();
        let view = navigator.on_start();

        assert!(view.text.contains("Vítejte"));
        assert!(view.text.contains("Welcome"));
    }

    #[test]
    fn test_start_is_idempotent() {
        let navigator = setup_navigator();

        let first = navigator.on_start();
        // Walk to a leaf in between, as a user would before re-running /start
        let _ = navigator.on_language_selected(Language::En);
        let _ = navigator.on_topic_selected(Topic::Reasons, Language::En);
        let second = navigator.on_start();

        assert_eq!(first, second);
    }

    #[test]
    fn test_czech_topic_menu() {
        let navigator = setup_navigator();
        let view = navigator.on_language_selected(Language::Cz);

        assert_eq!(view.screen, Screen::LanguageMenu(Language::Cz));
        assert_eq!(view.text, "Na co se mě můžeš zeptat:");

        let keyboard = view.keyboard.expect("Topic menu should have buttons");
        let ids = button_ids(&keyboard);
        assert_eq!(ids.len(), 6);
        assert!(ids.iter().all(|id| id.ends_with("_cz")));
        assert_eq!(
            ids,
            vec!["menu_cz", "hours_cz", "where_cz", "contact_cz", "preorder_cz", "reasons_cz"]
        );
    }

    #[test]
    fn test_english_topic_menu() {
        let navigator = setup_navigator();
        let view = navigator.on_language_selected(Language::En);

        assert_eq!(view.screen, Screen::LanguageMenu(Language::En));
        assert_eq!(view.text, "What you can ask me:");

        let keyboard = view.keyboard.expect("Topic menu should have buttons");
        let ids = button_ids(&keyboard);
        assert_eq!(ids.len(), 6);
        assert!(ids.iter().all(|id| id.ends_with("_en")));
    }

    #[test]
    fn test_topic_menu_layout_and_labels() {
        let navigator = setup_navigator();
        let keyboard = navigator
            .on_language_selected(Language::En)
            .keyboard
            .expect("Topic menu should have buttons");

        let InlineKeyboardMarkup {
            inline_keyboard: rows,
        } = keyboard;
        // Two buttons per row
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == 2));
        assert_eq!(rows[0][0].text, "🧾 Menu & Offerings");
        assert_eq!(rows[2][1].text, "😎 Reasons to grab a coffee");
    }

    #[test]
    fn test_topic_labels_follow_language() {
        let navigator = setup_navigator();
        let cz = navigator.on_language_selected(Language::Cz).keyboard.unwrap();
        let en = navigator.on_language_selected(Language::En).keyboard.unwrap();

        assert_eq!(cz.inline_keyboard[0][1].text, "🕐 Otevírací doba");
        assert_eq!(en.inline_keyboard[0][1].text, "🕐 Opening Hours");
    }

    #[test]
    fn test_every_leaf_has_content_and_no_buttons() {
        let navigator = setup_navigator();

        for language in Language::ALL {
            for topic in Topic::ALL {
                let view = navigator.on_topic_selected(topic, language);
                assert_eq!(view.screen, Screen::ContentLeaf(language, topic));
                assert!(view.keyboard.is_none());
                assert_eq!(view.text, navigator.content().text(language, topic));
                assert!(!view.text.is_empty());
            }
        }
    }

    #[test]
    fn test_route_follows_button_identifiers() {
        let navigator = setup_navigator();

        let view = navigator.route("lang_cz").unwrap();
        assert_eq!(view, navigator.on_language_selected(Language::Cz));

        let view = navigator.route("where_en").unwrap();
        assert_eq!(view, navigator.on_topic_selected(Topic::Where, Language::En));
        assert!(view.text.contains("Vyskočilova 1100/2"));
    }

    #[test]
    fn test_every_rendered_button_is_routable() {
        let navigator = setup_navigator();
        let start_keyboard = navigator.on_start().keyboard.unwrap();

        for id in button_ids(&start_keyboard) {
            let menu = navigator.route(&id).expect("Language button should route");
            for topic_id in button_ids(&menu.keyboard.unwrap()) {
                assert!(navigator.route(&topic_id).is_ok(), "{topic_id} should route");
            }
        }
    }

    #[test]
    fn test_route_rejects_unknown_identifiers() {
        let navigator = setup_navigator();

        for data in ["lang_fr", "menu_de", "confirm", "", "hours"] {
            assert_eq!(
                navigator.route(data),
                Err(BotError::UnroutableEvent(data.to_string()))
            );
        }
    }
}
