//! Language-prefixed routing.
//!
//! - `router`: path to `Resolution` (language + page, not-found, or redirect)
//! - `tree`: declarative route entries per language
//! - `validator`: startup validation of the route table

mod router;
mod tree;
mod validator;

pub use router::{resolve, switcher_links, Resolution};
pub use tree::{declared_routes, NavItem, PageKind, RouteEntry, RouteTable, RouteTree};
pub use validator::{RouteValidator, ValidationReport};
