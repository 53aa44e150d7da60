//! Language type: validated representation of a site language.

use crate::i18n::strings::{
    LanguageStrings, ENGLISH_STRINGS, GERMAN_STRINGS, HUNGARIAN_STRINGS, ROMANIAN_STRINGS,
};
use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated language.
///
/// Only supported, enabled languages can be constructed, so every `Language`
/// has a route tree and a string table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "hu", "en")
    code: &'static str,
}

impl Language {
    pub const HUNGARIAN: Language = Language { code: "hu" };
    pub const ENGLISH: Language = Language { code: "en" };
    pub const GERMAN: Language = Language { code: "de" };
    pub const ROMANIAN: Language = Language { code: "ro" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The site's default language (Hungarian).
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// All enabled languages, in language switcher order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This cannot
    /// happen for a Language built via `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Root path of this language's route tree (`/hu`, `/en`, ...).
    ///
    /// The language switcher always navigates here; the current sub-page is
    /// not preserved.
    pub fn root_path(&self) -> String {
        format!("/{}", self.code)
    }

    /// Localized user-facing strings for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        match self.code {
            "hu" => &HUNGARIAN_STRINGS,
            "de" => &GERMAN_STRINGS,
            "ro" => &ROMANIAN_STRINGS,
            _ => &ENGLISH_STRINGS,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

/// Languages travel over the wire as their bare code (`"lang": "hu"`).
impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_hungarian_constant() {
        let hungarian = Language::HUNGARIAN;
        assert_eq!(hungarian.code(), "hu");
        assert_eq!(hungarian.name(), "Hungarian");
        assert_eq!(hungarian.native_name(), "Magyar");
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_all_supported() {
        for code in ["hu", "en", "de", "ro"] {
            let language = Language::from_code(code).expect("Should succeed");
            assert_eq!(language.code(), code);
        }
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Language::from_code("EN").is_err());
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    // ==================== Default / Ordering Tests ====================

    #[test]
    fn test_default_is_hungarian() {
        assert_eq!(Language::default_language(), Language::HUNGARIAN);
    }

    #[test]
    fn test_all_in_switcher_order() {
        assert_eq!(
            Language::all(),
            vec![
                Language::HUNGARIAN,
                Language::ENGLISH,
                Language::GERMAN,
                Language::ROMANIAN
            ]
        );
    }

    // ==================== Path / Display Tests ====================

    #[test]
    fn test_root_path() {
        assert_eq!(Language::HUNGARIAN.root_path(), "/hu");
        assert_eq!(Language::ENGLISH.root_path(), "/en");
        assert_eq!(Language::GERMAN.root_path(), "/de");
        assert_eq!(Language::ROMANIAN.root_path(), "/ro");
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::GERMAN.to_string(), "de");
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&Language::ROMANIAN).expect("serialize");
        assert_eq!(json, "\"ro\"");
    }

    // ==================== Strings Tests ====================

    #[test]
    fn test_strings_per_language() {
        assert_eq!(Language::HUNGARIAN.strings().nav_home, "Főoldal");
        assert_eq!(Language::ENGLISH.strings().nav_home, "Home");
        assert_eq!(Language::GERMAN.strings().nav_home, "Startseite");
        assert_eq!(Language::ROMANIAN.strings().nav_home, "Acasă");
    }
}
