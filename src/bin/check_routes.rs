//! Route table check - prints every language's routes and validates them
//!
//! Usage:
//!   cargo run --bin check-routes
//!
//! Exits with an error when the route table has validation errors.

use anyhow::{bail, Result};
use taltos_site::i18n::Language;
use taltos_site::routing::{RouteTable, RouteValidator};

fn main() -> Result<()> {
    let table = RouteTable::build();

    for language in Language::all() {
        println!(
            "{} / {} ({})",
            language.native_name(),
            language.name(),
            language.code()
        );
        match table.tree(language) {
            Some(tree) => {
                for item in tree.nav_items() {
                    let form = if item.page.has_form() { "form" } else { "" };
                    println!(
                        "  {:<20} {:<20} {:<10} {}",
                        item.href,
                        item.label,
                        format!("{:?}", item.page),
                        form
                    );
                }
            }
            None => println!("  <no route tree>"),
        }
        println!();
    }

    let report = RouteValidator::validate(&table);
    for warning in &report.warnings {
        println!("warning: {}", warning);
    }
    for error in &report.errors {
        println!("error: {}", error);
    }

    if report.has_errors() {
        bail!("{} route table error(s)", report.errors.len());
    }

    println!("✓ Route table is valid");
    Ok(())
}
