// SPDX-License-Identifier: MPL-2.0
use crate::config::Settings;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

/// Locale used when nothing else matches.
pub const DEFAULT_LOCALE: &str = "pt-BR";

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    default_locale: LanguageIdentifier,
}

impl Default for I18n {
    /// Loads every bundle and selects the default locale, ignoring the system.
    fn default() -> Self {
        let mut i18n = Self::load();
        i18n.current_locale = i18n.default_locale.clone();
        i18n
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, settings: &Settings) -> Self {
        let mut i18n = Self::load();
        let system = sys_locale::get_locale();
        if let Some(locale) = resolve_locale(
            cli_lang.as_deref(),
            settings.general.language.as_deref(),
            system.as_deref(),
            &i18n.available_locales,
        ) {
            i18n.current_locale = locale;
        } else {
            i18n.current_locale = i18n.default_locale.clone();
        }
        tracing::debug!(locale = %i18n.current_locale, "locale resolved");
        i18n
    }

    fn load() -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(file = filename, "skipping translation with invalid locale name");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    tracing::warn!(file = filename, ?errors, "translation file has syntax errors");
                    resource
                }
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(file = filename, ?errors, "duplicate translation messages");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap_or_default();
        Self {
            bundles,
            available_locales,
            current_locale: default_locale.clone(),
            default_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switches locale; unknown locales are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Formats a message with named string arguments.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        for locale in [&self.current_locale, &self.default_locale] {
            let Some(bundle) = self.bundles.get(locale) else {
                continue;
            };
            let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) else {
                continue;
            };
            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, args, &mut errors);
            if errors.is_empty() {
                return value.to_string();
            }
            tracing::debug!(key, ?errors, "failed to format message");
        }
        format!("MISSING: {key}")
    }
}

/// Picks the first available locale from CLI, settings, then system.
///
/// A candidate matches exactly, or by language alone (`pt-PT` selects `pt-BR`).
fn resolve_locale(
    cli_lang: Option<&str>,
    settings_lang: Option<&str>,
    system_lang: Option<&str>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    [cli_lang, settings_lang, system_lang]
        .into_iter()
        .flatten()
        .find_map(|candidate| match_locale(candidate, available))
}

fn match_locale(candidate: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let wanted = candidate.replace('_', "-").parse::<LanguageIdentifier>().ok()?;
    if available.contains(&wanted) {
        return Some(wanted);
    }
    available
        .iter()
        .find(|locale| locale.language == wanted.language)
        .cloned()
}
