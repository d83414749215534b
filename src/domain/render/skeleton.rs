//! Loading skeleton renderer.

use crate::domain::descriptor::{SkeletonDescriptor, SkeletonKind};
use crate::domain::error::ChartmasterError;
use crate::domain::markup::Markup;
use crate::domain::tokens::{TokenCategory, TokenStore};

/// Render loading placeholders.
///
/// The shimmer speed comes from the theme's duration token. The
/// skeleton-to-content transition is a host concern.
pub fn render_skeleton(
    tokens: &TokenStore,
    descriptor: &SkeletonDescriptor,
) -> Result<Markup, ChartmasterError> {
    let shimmer = tokens.var(TokenCategory::Duration, "shimmer")?;
    let style = format!("style=\"animation-duration: {shimmer};\"");

    let mut html = String::new();
    match descriptor.kind {
        SkeletonKind::Text => {
            for _ in 0..descriptor.count {
                html.push_str(&format!("<div class=\"skeleton skeleton-text\" {style}></div>"));
            }
        }
        SkeletonKind::Chart => {
            html.push_str(&format!("<div class=\"skeleton skeleton-chart\" {style}></div>"));
        }
        SkeletonKind::Table => {
            for _ in 0..descriptor.count {
                html.push_str(&format!("<div class=\"skeleton skeleton-row\" {style}></div>"));
            }
        }
    }

    Ok(Markup::trusted(html))
}
