// Library exports for use in binaries and tests
pub mod api;
pub mod config;
pub mod forms;
pub mod i18n;
pub mod metrics;
pub mod pages;
pub mod routing;
pub mod server;
