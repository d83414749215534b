//! Port traits crossed by adapters.

pub mod config_port;
pub mod theme_port;
