//! Language router: URL path to language and page.
//!
//! The language is derived from the path on every request and never stored,
//! so the rendered language and the URL cannot disagree.

use crate::i18n::Language;
use crate::routing::tree::{RouteEntry, RouteTable};

/// Outcome of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A known language prefix and a matching route entry
    Page { language: Language, entry: RouteEntry },
    /// A known language prefix with an unknown relative path
    NotFound { language: Language },
    /// Anything else; redirect to the default language's root
    Redirect { location: String },
}

/// Split a path into its first segment and the remaining relative path.
///
/// The relative path has no leading or trailing slashes: `/en/about/` yields
/// `("en", "about")`, `/hu` yields `("hu", "")`.
fn split_prefix(path: &str) -> (&str, &str) {
    let trimmed = path.trim_start_matches('/');
    match trimmed.split_once('/') {
        Some((prefix, rest)) => (prefix, rest.trim_end_matches('/')),
        None => (trimmed, ""),
    }
}

/// Resolve a request path against the route table.
pub fn resolve(table: &RouteTable, path: &str) -> Resolution {
    let (prefix, relative) = split_prefix(path);

    let Some(tree) = Language::from_code(prefix)
        .ok()
        .and_then(|language| table.tree(language))
    else {
        return Resolution::Redirect {
            location: Language::default_language().root_path(),
        };
    };

    match tree.match_path(relative) {
        Some(entry) => Resolution::Page {
            language: tree.language,
            entry,
        },
        None => Resolution::NotFound {
            language: tree.language,
        },
    }
}

/// Language switcher targets: each language's root, in switcher order.
pub fn switcher_links() -> Vec<(Language, String)> {
    Language::all()
        .into_iter()
        .map(|language| (language, language.root_path()))
        .collect()
}
