//! Language registry: Single source of truth for all supported site languages.
//!
//! This module provides a centralized registry of every language the site is
//! served in. It uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access.

use std::sync::OnceLock;

/// Configuration for a supported language.
///
/// Contains all metadata for a specific language, including its code, names,
/// enabled status, and whether it's the default language of the site.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code, also the URL prefix (e.g., "hu", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Hungarian", "German")
    pub name: &'static str,

    /// Native name of the language (e.g., "Magyar", "Deutsch")
    pub native_name: &'static str,

    /// Whether this is the default language (only one should be true).
    /// Unknown paths redirect to the default language's root.
    pub is_default: bool,

    /// Whether this language is served
    pub enabled: bool,
}

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter. The order of
/// languages is the order of the language switcher.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in switcher order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if no default language is found or if multiple default
    /// languages are defined (this indicates a configuration error).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }
}

/// Default language configurations: Hungarian (default), English, German
/// and Romanian.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "hu",
            name: "Hungarian",
            native_name: "Magyar",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "ro",
            name: "Romanian",
            native_name: "Română",
            is_default: false,
            enabled: true,
        },
    ]
}
