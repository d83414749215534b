//! chartmaster — component rendering and theming engine for a trading
//! dashboard frontend.
//!
//! Hexagonal architecture: rendering engine in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`]. Pages compose output
//! by calling [`domain::theme::ThemeLoader::ensure_loaded`] once, then
//! [`domain::render::render_header`] once, then any sequence of body
//! renderers, concatenating the results.

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
