//! Route trees: the declarative page table of each language.
//!
//! Hungarian uses localized slugs; the international tree (en, de, ro) uses
//! English slugs and adds the camping page. Entry order is menu order.

use crate::i18n::{Language, LanguageStrings};
use crate::routing::validator::RouteValidator;
use anyhow::{bail, Result};
use std::collections::HashMap;
use tracing::warn;

/// The kinds of page a route entry can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    About,
    Lessons,
    /// Tour overview with the embedded booking form
    Tours,
    Camping,
    News,
    Contact,
}

impl PageKind {
    /// Navigation label of this page in the given string table.
    pub fn label(&self, strings: &LanguageStrings) -> &'static str {
        match self {
            PageKind::Home => strings.nav_home,
            PageKind::About => strings.nav_about,
            PageKind::Lessons => strings.nav_lessons,
            PageKind::Tours => strings.nav_tours,
            PageKind::Camping => strings.nav_camping,
            PageKind::News => strings.nav_news,
            PageKind::Contact => strings.nav_contact,
        }
    }

    /// Whether this page accepts a form submission (POST).
    pub fn has_form(&self) -> bool {
        matches!(self, PageKind::Tours | PageKind::Contact)
    }
}

/// A path segment relative to the language prefix, bound to a page.
/// The index entry has an empty slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub slug: &'static str,
    pub page: PageKind,
}

impl RouteEntry {
    const fn new(slug: &'static str, page: PageKind) -> Self {
        Self { slug, page }
    }

    pub fn is_index(&self) -> bool {
        self.slug.is_empty()
    }

    /// Absolute path of this entry under the language prefix.
    pub fn path(&self, language: Language) -> String {
        if self.is_index() {
            language.root_path()
        } else {
            format!("{}/{}", language.root_path(), self.slug)
        }
    }
}

/// A navigation menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub href: String,
    pub label: &'static str,
    pub page: PageKind,
}

const HUNGARIAN_ROUTES: &[RouteEntry] = &[
    RouteEntry::new("", PageKind::Home),
    RouteEntry::new("rolunk", PageKind::About),
    RouteEntry::new("oktatas", PageKind::Lessons),
    RouteEntry::new("turak", PageKind::Tours),
    RouteEntry::new("hirek", PageKind::News),
    RouteEntry::new("kapcsolat", PageKind::Contact),
];

const INTERNATIONAL_ROUTES: &[RouteEntry] = &[
    RouteEntry::new("", PageKind::Home),
    RouteEntry::new("about", PageKind::About),
    RouteEntry::new("riding", PageKind::Lessons),
    RouteEntry::new("tours", PageKind::Tours),
    RouteEntry::new("camping", PageKind::Camping),
    RouteEntry::new("news", PageKind::News),
    RouteEntry::new("contact", PageKind::Contact),
];

/// Declared route entries for a language.
pub fn declared_routes(language: Language) -> &'static [RouteEntry] {
    if language == Language::HUNGARIAN {
        HUNGARIAN_ROUTES
    } else {
        INTERNATIONAL_ROUTES
    }
}

/// The route tree of a single language.
#[derive(Debug, Clone)]
pub struct RouteTree {
    pub language: Language,
    pub entries: Vec<RouteEntry>,
}

impl RouteTree {
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            entries: declared_routes(language).to_vec(),
        }
    }

    /// Exact match of a relative path (prefix and trailing slash already
    /// stripped). The empty path is the index.
    pub fn match_path(&self, relative: &str) -> Option<RouteEntry> {
        self.entries
            .iter()
            .find(|entry| entry.slug == relative)
            .copied()
    }

    /// The entry rendering the given page, if this language has it.
    pub fn entry_for(&self, page: PageKind) -> Option<RouteEntry> {
        self.entries.iter().find(|entry| entry.page == page).copied()
    }

    /// Absolute path of a page in this tree. Falls back to the language
    /// root for pages the tree does not have.
    pub fn href(&self, page: PageKind) -> String {
        self.entry_for(page)
            .map(|entry| entry.path(self.language))
            .unwrap_or_else(|| self.language.root_path())
    }

    /// Navigation menu in declaration order.
    pub fn nav_items(&self) -> Vec<NavItem> {
        let strings = self.language.strings();
        self.entries
            .iter()
            .map(|entry| NavItem {
                href: entry.path(self.language),
                label: entry.page.label(strings),
                page: entry.page,
            })
            .collect()
    }
}

/// Route trees of every enabled language, keyed by language.
#[derive(Debug, Clone)]
pub struct RouteTable {
    trees: HashMap<Language, RouteTree>,
}

impl RouteTable {
    /// Build the table from the declared routes without validating it.
    pub fn build() -> Self {
        Self::from_trees(Language::all().into_iter().map(RouteTree::for_language))
    }

    /// Build the table and validate it, failing on any error.
    pub fn validated() -> Result<Self> {
        let table = Self::build();
        let report = RouteValidator::validate(&table);

        for warning in &report.warnings {
            warn!("Route table warning: {}", warning);
        }
        if report.has_errors() {
            bail!("Invalid route table: {}", report.errors.join("; "));
        }

        Ok(table)
    }

    pub fn from_trees(trees: impl IntoIterator<Item = RouteTree>) -> Self {
        Self {
            trees: trees
                .into_iter()
                .map(|tree| (tree.language, tree))
                .collect(),
        }
    }

    pub fn tree(&self, language: Language) -> Option<&RouteTree> {
        self.trees.get(&language)
    }
}
