pub mod config;
pub mod i18n;
pub mod relay;
pub mod server;
pub mod translation;
