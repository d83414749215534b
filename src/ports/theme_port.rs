//! Stylesheet resource access port trait.

use crate::domain::error::ChartmasterError;

/// Source of the theme stylesheet.
///
/// The one place the engine touches I/O. Implementations must use scoped
/// reads so the resource is released regardless of outcome.
pub trait ThemeSourcePort {
    fn read_stylesheet(&self) -> Result<String, ChartmasterError>;
}
