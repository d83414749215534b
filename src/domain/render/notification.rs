//! Notification renderer.

use crate::domain::descriptor::NotificationDescriptor;
use crate::domain::error::ChartmasterError;
use crate::domain::markup::{Markup, escape_text};
use crate::domain::tokens::{TokenCategory, TokenStore};

/// Render a notification banner.
///
/// The accent color is resolved symbolically from the kind's semantic color
/// token. Auto-dismiss timing is a host concern; the markup carries no
/// timing state.
pub fn render_notification(
    tokens: &TokenStore,
    descriptor: &NotificationDescriptor,
) -> Result<Markup, ChartmasterError> {
    let accent = tokens.var(TokenCategory::Color, descriptor.kind.color_token_key())?;

    let mut html = format!(
        "<div class=\"notification {}\" style=\"border-left: 4px solid {};\">",
        descriptor.kind.css_class(),
        accent,
    );
    html.push_str(&format!(
        "<div class=\"notification-title\">{}</div>",
        descriptor.kind.title()
    ));
    html.push_str(&format!(
        "<div class=\"notification-message\">{}</div>",
        escape_text(&descriptor.message)
    ));
    html.push_str("</div>");

    Ok(Markup::trusted(html))
}
