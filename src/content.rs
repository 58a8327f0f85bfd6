//! # Content Module
//!
//! The café's static texts, keyed by language and topic. The table is
//! resolved once at startup from the embedded Fluent resources and is
//! read-only afterwards.

use std::collections::HashMap;
use std::fmt;

use anyhow::Result;

use crate::errors::BotError;
use crate::localization::LocalizationManager;

/// Languages the bot can talk in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Cz,
    En,
}

impl Language {
    /// All languages, in the order their buttons are shown
    pub const ALL: [Language; 2] = [Language::Cz, Language::En];

    /// Code used inside button identifiers
    pub fn code(self) -> &'static str {
        match self {
            Language::Cz => "cz",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|language| language.code() == code)
    }

    /// BCP 47 locale of the Fluent bundle
    pub fn locale(self) -> &'static str {
        match self {
            Language::Cz => "cs",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Informational categories offered in the topic menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Menu,
    Hours,
    Where,
    Contact,
    Preorder,
    Reasons,
}

impl Topic {
    /// All topics, in menu order
    pub const ALL: [Topic; 6] = [
        Topic::Menu,
        Topic::Hours,
        Topic::Where,
        Topic::Contact,
        Topic::Preorder,
        Topic::Reasons,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Topic::Menu => "menu",
            Topic::Hours => "hours",
            Topic::Where => "where",
            Topic::Contact => "contact",
            Topic::Preorder => "preorder",
            Topic::Reasons => "reasons",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|topic| topic.code() == code)
    }

    fn text_key(self) -> String {
        format!("topic-{}", self.code())
    }

    fn button_key(self) -> String {
        format!("button-{}", self.code())
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Immutable lookup of every string the navigator renders
#[derive(Debug, Clone)]
pub struct ContentTable {
    greeting: String,
    language_names: HashMap<Language, String>,
    prompts: HashMap<Language, String>,
    labels: HashMap<(Language, Topic), String>,
    texts: HashMap<(Language, Topic), String>,
}

impl ContentTable {
    /// Resolve all strings from the given localization manager.
    ///
    /// Fails if any language lacks one of the required messages, so a
    /// successfully loaded table always has an entry for every
    /// (language, topic) pair.
    pub fn load(manager: &LocalizationManager) -> Result<Self, BotError> {
        let lookup = |key: &str, language: Language| {
            manager
                .get_message_in_language(key, language)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| BotError::MissingContent(format!("{key} ({language})")))
        };

        let mut welcomes = Vec::with_capacity(Language::ALL.len());
        let mut language_names = HashMap::new();
        let mut prompts = HashMap::new();
        let mut labels = HashMap::new();
        let mut texts = HashMap::new();

        for language in Language::ALL {
            welcomes.push(lookup("welcome", language)?);
            language_names.insert(language, lookup("language-name", language)?);
            prompts.insert(language, lookup("topics-prompt", language)?);

            for topic in Topic::ALL {
                labels.insert((language, topic), lookup(&topic.button_key(), language)?);
                texts.insert((language, topic), lookup(&topic.text_key(), language)?);
            }
        }

        Ok(Self {
            greeting: welcomes.join("\n\n"),
            language_names,
            prompts,
            labels,
            texts,
        })
    }

    /// Load the table from the resources compiled into the binary
    pub fn from_embedded() -> Result<Self> {
        let manager = LocalizationManager::new()?;
        Ok(Self::load(&manager)?)
    }

    /// Bilingual welcome shown by the start command
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// Label of the language selection button
    pub fn language_name(&self, language: Language) -> &str {
        by_language(&self.language_names, language)
    }

    /// Prompt shown above the topic menu
    pub fn prompt(&self, language: Language) -> &str {
        by_language(&self.prompts, language)
    }

    pub fn label(&self, language: Language, topic: Topic) -> &str {
        self.labels.get(&(language, topic)).map_or("", String::as_str)
    }

    pub fn text(&self, language: Language, topic: Topic) -> &str {
        self.texts.get(&(language, topic)).map_or("", String::as_str)
    }
}

fn by_language(map: &HashMap<Language, String>, language: Language) -> &str {
    map.get(&language).map_or("", String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn table() -> ContentTable {
        ContentTable::from_embedded().expect("Embedded content should load")
    }

    #[test]
    fn test_every_entry_present_and_distinct() {
        let table = table();
        let mut seen = HashSet::new();

        for language in Language::ALL {
            for topic in Topic::ALL {
                let text = table.text(language, topic);
                assert!(!text.is_empty(), "{topic}_{language} is empty");
                assert!(seen.insert(text.to_string()), "{topic}_{language} is duplicated");
            }
        }

        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn test_codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        for topic in Topic::ALL {
            assert_eq!(Topic::from_code(topic.code()), Some(topic));
        }
        assert_eq!(Language::from_code("cs"), None);
        assert_eq!(Topic::from_code("lang"), None);
    }

    #[test]
    fn test_greeting_is_bilingual() {
        let table = table();
        assert!(table.greeting().contains("Vítejte"));
        assert!(table.greeting().contains("Welcome"));
        assert!(table.greeting().find("Vítejte") < table.greeting().find("Welcome"));
    }

    #[test]
    fn test_html_ampersands_escaped() {
        let table = table();
        let hours = table.text(Language::En, Topic::Hours);
        assert!(hours.contains("Sat &amp; Sun"));
        assert!(!hours.contains("Sat & Sun"));
    }

    #[test]
    fn test_reasons_keep_literal_asterisks() {
        let table = table();
        let reasons = table.text(Language::En, Topic::Reasons);
        assert!(reasons.contains("you were *almost* productive today"));
        assert!(!reasons.contains("<i>"));
    }
}
