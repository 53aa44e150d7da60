//! Internationalization (i18n) module for the site's four languages.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type validated against the registry
//! - `strings`: Static localized string table per language
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::Language;
//!
//! let german = Language::from_code("de")?;
//! assert_eq!(german.strings().nav_home, "Startseite");
//! ```

mod language;
mod registry;
mod strings;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{LanguageStrings, SITE_NAME};
