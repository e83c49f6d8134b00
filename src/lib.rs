pub mod api;
pub mod config;
pub mod core;
pub mod i18n;
pub mod report;
