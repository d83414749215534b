//! Empty-state renderer.

use crate::domain::descriptor::EmptyStateDescriptor;
use crate::domain::error::ChartmasterError;
use crate::domain::markup::{Markup, escape_text};
use crate::domain::tokens::{TokenCategory, TokenStore};

/// Render an empty state with icon, title, description and an optional
/// call-to-action button. The icon slot is trusted markup (inline SVG or a
/// glyph from a trusted template); the icon size is fixed by the theme's
/// typography token.
pub fn render_empty_state(
    tokens: &TokenStore,
    descriptor: &EmptyStateDescriptor,
) -> Result<Markup, ChartmasterError> {
    let icon_size = tokens.var(TokenCategory::Typography, "size-icon")?;

    let mut html = String::from("<div class=\"empty-state\">");
    html.push_str(&format!(
        "<div class=\"empty-state-icon\" style=\"font-size: {icon_size};\">{}</div>",
        descriptor.icon.as_str()
    ));
    html.push_str(&format!(
        "<h3 class=\"empty-state-title\">{}</h3>",
        escape_text(&descriptor.title)
    ));
    html.push_str(&format!(
        "<p class=\"empty-state-description\">{}</p>",
        escape_text(&descriptor.description)
    ));
    if let Some(label) = &descriptor.action_label {
        html.push_str(&format!(
            "<button class=\"btn btn-primary\">{}</button>",
            escape_text(label)
        ));
    }
    html.push_str("</div>");

    Ok(Markup::trusted(html))
}
