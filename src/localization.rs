use anyhow::{anyhow, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use std::collections::HashMap;
use tracing::warn;
use unic_langid::LanguageIdentifier;

use crate::content::Language;

const CZ_RESOURCE: &str = include_str!("../locales/cz/main.ftl");
const EN_RESOURCE: &str = include_str!("../locales/en/main.ftl");

/// Localization manager for the Coffee Perk bot
pub struct LocalizationManager {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
}

impl LocalizationManager {
    /// Create a new localization manager with a bundle for every language
    pub fn new() -> Result<Self> {
        let mut bundles = HashMap::new();

        for language in Language::ALL {
            let bundle = Self::create_bundle(language, Self::resource_source(language))?;
            bundles.insert(language, bundle);
        }

        Ok(Self { bundles })
    }

    /// Create a manager from explicit FTL sources, one per language
    pub fn from_sources(sources: &[(Language, &str)]) -> Result<Self> {
        let mut bundles = HashMap::new();

        for &(language, source) in sources {
            bundles.insert(language, Self::create_bundle(language, source)?);
        }

        Ok(Self { bundles })
    }

    fn resource_source(language: Language) -> &'static str {
        match language {
            Language::Cz => CZ_RESOURCE,
            Language::En => EN_RESOURCE,
        }
    }

    /// Create a fluent bundle for a specific language
    fn create_bundle(language: Language, source: &str) -> Result<FluentBundle<FluentResource>> {
        let locale: LanguageIdentifier = language.locale().parse()?;
        let mut bundle = FluentBundle::new(vec![locale]);
        // Texts go straight to Telegram, no bidi isolation marks
        bundle.set_use_isolating(false);

        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            anyhow!("Failed to parse {} resource: {:?}", language.code(), errors)
        })?;
        bundle
            .add_resource(resource)
            .map_err(|errors| anyhow!("Failed to add {} resource: {:?}", language.code(), errors))?;

        Ok(bundle)
    }

    /// Get a localized message, or `None` if the language or key is unknown
    pub fn get_message_in_language(&self, key: &str, language: Language) -> Option<String> {
        let bundle = self.bundles.get(&language)?;
        let pattern = bundle.get_message(key)?.value()?;

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            warn!(key, language = %language, errors = ?errors, "Errors while formatting message");
        }

        Some(value.into_owned())
    }
}
