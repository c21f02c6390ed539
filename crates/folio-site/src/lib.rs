//! Single-page portfolio site.
//!
//! This crate provides the Dioxus components for every display section and
//! decorative widget, the theming root, service wiring for the external
//! collaborators, and logging setup for the `folio-site` binary.

pub mod components;
pub mod logging;
pub mod script;
pub mod services;
pub mod theme;

/// Site stylesheet. Colors come from the theme's CSS variables.
pub const SITE_CSS: &str = include_str!("../assets/styles.css");
