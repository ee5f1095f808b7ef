pub mod config;
pub mod document;
pub mod i18n;
pub mod pipeline;
pub mod render;
pub mod translation;
