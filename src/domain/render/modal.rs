//! Modal dialog renderer.

use crate::domain::descriptor::ModalDescriptor;
use crate::domain::error::ChartmasterError;
use crate::domain::markup::{Markup, escape_text};
use crate::domain::tokens::{TokenCategory, TokenStore};

/// Render a modal dialog.
///
/// Emits the markup for a given instant's descriptor only; open/close
/// lifecycle belongs to the host. Action labels must be non-empty.
pub fn render_modal(
    tokens: &TokenStore,
    descriptor: &ModalDescriptor,
) -> Result<Markup, ChartmasterError> {
    for (index, action) in descriptor.actions.iter().enumerate() {
        if action.label.trim().is_empty() {
            return Err(ChartmasterError::InvalidAction { index });
        }
    }

    let shadow = tokens.var(TokenCategory::Shadow, "modal")?;

    let mut html = String::from("<div class=\"modal-overlay\">");
    html.push_str(&format!(
        "<div class=\"modal\" style=\"box-shadow: {shadow};\">"
    ));
    html.push_str(&format!(
        "<div class=\"modal-header\"><h2 class=\"modal-title\">{}</h2></div>",
        escape_text(&descriptor.title)
    ));

    html.push_str("<div class=\"modal-body\">");
    html.push_str(descriptor.body.as_str());
    html.push_str("</div>");

    html.push_str("<div class=\"modal-actions\">");
    for action in &descriptor.actions {
        html.push_str(&format!(
            "<button class=\"btn {}\">{}</button>",
            action.role.css_class(),
            escape_text(&action.label)
        ));
    }
    html.push_str("</div></div></div>");

    Ok(Markup::trusted(html))
}
