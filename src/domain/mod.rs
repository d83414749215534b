//! Core engine: design tokens, trusted markup, descriptors, renderers.

pub mod compose;
pub mod descriptor;
pub mod error;
pub mod markup;
pub mod render;
pub mod theme;
pub mod tokens;
