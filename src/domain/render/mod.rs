//! Component renderers.
//!
//! Every renderer is a pure function from a descriptor to a [`Markup`]
//! fragment, parameterized only by the frozen token store passed by
//! reference. Given the same descriptor and store, output is identical;
//! there are no side effects and no retained state.

mod empty_state;
mod header;
mod modal;
mod notification;
mod skeleton;
mod table;
mod widget;

use crate::domain::tokens::TokenCategory;

pub use empty_state::render_empty_state;
pub use header::render_header;
pub use modal::render_modal;
pub use notification::render_notification;
pub use skeleton::render_skeleton;
pub use table::{RowClassifier, render_table};
pub use widget::{render_metric_card, render_widget};

/// Every token the renderers resolve symbolically. A theme missing one of
/// these will fail the corresponding render call with `UnknownToken`.
pub const REQUIRED_TOKENS: &[(TokenCategory, &str)] = &[
    (TokenCategory::Color, "positive"),
    (TokenCategory::Color, "negative"),
    (TokenCategory::Color, "warning"),
    (TokenCategory::Color, "accent-blue"),
    (TokenCategory::Shadow, "modal"),
    (TokenCategory::Duration, "shimmer"),
    (TokenCategory::Typography, "size-icon"),
];
