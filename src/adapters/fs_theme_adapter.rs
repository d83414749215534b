//! Filesystem stylesheet adapter.

use std::path::{Path, PathBuf};

use crate::domain::error::ChartmasterError;
use crate::ports::config_port::ConfigPort;
use crate::ports::theme_port::ThemeSourcePort;

/// Documented relative location of the design-system stylesheet.
pub const DEFAULT_STYLESHEET_PATH: &str = "static/css/design-system.css";

pub struct FsThemeAdapter {
    path: PathBuf,
}

impl FsThemeAdapter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Resolve the stylesheet path from `[theme] stylesheet_path`, falling
    /// back to the documented default location.
    pub fn from_config(config: &dyn ConfigPort) -> Self {
        let path = config
            .get_string("theme", "stylesheet_path")
            .unwrap_or_else(|| DEFAULT_STYLESHEET_PATH.to_string());
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FsThemeAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_STYLESHEET_PATH)
    }
}

impl ThemeSourcePort for FsThemeAdapter {
    fn read_stylesheet(&self) -> Result<String, ChartmasterError> {
        log::debug!("reading stylesheet from {}", self.path.display());
        Ok(std::fs::read_to_string(&self.path)?)
    }
}
