//! Route table validation.
//!
//! Checked once at startup: every enabled language has a non-empty tree with
//! exactly one index entry, and within a tree slugs and pages are unique,
//! slugs are single lowercase path segments and every label is non-empty.

use crate::i18n::Language;
use crate::routing::tree::{RouteTable, RouteTree};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a route table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// Problems that make the table unusable
    pub errors: Vec<String>,

    /// Suspicious but servable configurations
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Validator for route tables.
pub struct RouteValidator;

static SLUG_REGEX: OnceLock<Regex> = OnceLock::new();

impl RouteValidator {
    /// Validate the whole table against the enabled languages.
    pub fn validate(table: &RouteTable) -> ValidationReport {
        let mut report = ValidationReport::new();

        for language in Language::all() {
            match table.tree(language) {
                Some(tree) => Self::validate_tree(tree, &mut report),
                None => report
                    .errors
                    .push(format!("Language '{}' has no route tree", language)),
            }
        }

        report
    }

    /// Validate a single language's tree, appending findings to `report`.
    pub fn validate_tree(tree: &RouteTree, report: &mut ValidationReport) {
        let code = tree.language.code();

        if tree.entries.is_empty() {
            report
                .errors
                .push(format!("Route tree for '{}' is empty", code));
            return;
        }

        let index_count = tree.entries.iter().filter(|e| e.is_index()).count();
        if index_count != 1 {
            report.errors.push(format!(
                "Route tree for '{}' has {} index entries, expected 1",
                code, index_count
            ));
        }

        let mut slugs = HashSet::new();
        let mut pages = HashSet::new();
        let strings = tree.language.strings();

        for entry in &tree.entries {
            if !slugs.insert(entry.slug) {
                report.errors.push(format!(
                    "Duplicate slug '{}' in route tree for '{}'",
                    entry.slug, code
                ));
            }
            if !pages.insert(entry.page) {
                report.errors.push(format!(
                    "Page {:?} is routed more than once for '{}'",
                    entry.page, code
                ));
            }
            if !entry.is_index() && !Self::is_valid_slug(entry.slug) {
                report.errors.push(format!(
                    "Invalid slug '{}' in route tree for '{}'",
                    entry.slug, code
                ));
            }
            if entry.page.label(strings).trim().is_empty() {
                report.errors.push(format!(
                    "Empty navigation label for {:?} in '{}'",
                    entry.page, code
                ));
            }
        }

        if tree.entries.first().is_some_and(|e| !e.is_index()) {
            report.warnings.push(format!(
                "Home is not the first menu item for '{}'",
                code
            ));
        }
    }

    /// A slug is one lowercase ASCII path segment.
    fn is_valid_slug(slug: &str) -> bool {
        let regex = SLUG_REGEX.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());
        regex.is_match(slug)
    }
}
