//! Dashboard widget and metric card renderers.

use crate::domain::descriptor::{MetricCard, WidgetDescriptor};
use crate::domain::error::ChartmasterError;
use crate::domain::markup::{Markup, escape_text};
use crate::domain::tokens::TokenStore;

/// Render a dashboard widget container.
///
/// The CSS grid span is derived deterministically from the descriptor's
/// size. `content` is accepted as already-trusted markup and emitted
/// verbatim; callers own that trust boundary. Every action label must be
/// non-empty.
pub fn render_widget(
    _tokens: &TokenStore,
    descriptor: &WidgetDescriptor,
) -> Result<Markup, ChartmasterError> {
    for (index, action) in descriptor.actions.iter().enumerate() {
        if action.trim().is_empty() {
            return Err(ChartmasterError::InvalidAction { index });
        }
    }

    let (rows, cols) = descriptor.size.grid_span();
    let mut html = format!(
        "<div class=\"widget {}\" style=\"grid-row: span {}; grid-column: span {};\">",
        descriptor.size.css_class(),
        rows,
        cols,
    );

    html.push_str("<div class=\"widget-header\">");
    html.push_str(&format!(
        "<h3 class=\"widget-title\">{}</h3>",
        escape_text(&descriptor.title)
    ));
    if !descriptor.actions.is_empty() {
        html.push_str("<div class=\"widget-actions\">");
        for action in &descriptor.actions {
            html.push_str(&format!(
                "<button class=\"widget-action-btn\" title=\"{}\">\u{22ef}</button>",
                escape_text(action)
            ));
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");

    html.push_str("<div class=\"widget-content\">");
    html.push_str(descriptor.content.as_str());
    html.push_str("</div></div>");

    Ok(Markup::trusted(html))
}

/// Render a compact metric tile inside a small widget shell.
pub fn render_metric_card(_tokens: &TokenStore, card: &MetricCard) -> Markup {
    let mut html = String::from(
        "<div class=\"widget widget-small metric-card\"><div class=\"metric-card-body\">",
    );
    html.push_str(&format!(
        "<div class=\"metric-label text-secondary\">{}</div>",
        escape_text(&card.label)
    ));
    html.push_str(&format!(
        "<div class=\"metric-value mono text-primary\">{}</div>",
        escape_text(&card.value)
    ));
    if let Some(change) = &card.change {
        let class = card.change_class.as_deref().unwrap_or("neutral");
        html.push_str(&format!(
            "<div class=\"metric-change {}\">{}</div>",
            escape_text(class),
            escape_text(change)
        ));
    }
    html.push_str("</div></div>");
    Markup::trusted(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::descriptor::WidgetSize;
    use crate::domain::theme::FALLBACK_STYLESHEET;

    fn store() -> TokenStore {
        TokenStore::from_stylesheet(FALLBACK_STYLESHEET).unwrap()
    }

    #[test]
    fn large_widget_spans_two_by_two() {
        let descriptor = WidgetDescriptor::new(
            "Market Overview",
            Markup::trusted("<p>x</p>"),
            WidgetSize::Large,
        );
        let html = render_widget(&store(), &descriptor).unwrap();
        assert!(html.as_str().contains("widget-large"));
        assert!(html.as_str().contains("grid-row: span 2"));
        assert!(html.as_str().contains("grid-column: span 2"));
    }

    #[test]
    fn medium_widget_spans_one_row_two_columns() {
        let descriptor =
            WidgetDescriptor::new("Movers", Markup::trusted("<p>x</p>"), WidgetSize::Medium);
        let html = render_widget(&store(), &descriptor).unwrap();
        assert!(html.as_str().contains("grid-row: span 1"));
        assert!(html.as_str().contains("grid-column: span 2"));
    }

    #[test]
    fn content_is_emitted_verbatim() {
        let descriptor = WidgetDescriptor::new(
            "Watchlist",
            Markup::trusted("<ul><li>AAPL</li></ul>"),
            WidgetSize::Small,
        );
        let html = render_widget(&store(), &descriptor).unwrap();
        assert!(html.as_str().contains("<ul><li>AAPL</li></ul>"));
    }

    #[test]
    fn title_is_escaped() {
        let descriptor = WidgetDescriptor::new(
            "<img src=x>",
            Markup::trusted("<p>x</p>"),
            WidgetSize::Small,
        );
        let html = render_widget(&store(), &descriptor).unwrap();
        assert!(html.as_str().contains("&lt;img src=x&gt;"));
    }

    #[test]
    fn actions_render_in_order() {
        let descriptor =
            WidgetDescriptor::new("Scanner", Markup::trusted("<p>x</p>"), WidgetSize::Small)
                .with_actions(vec!["Refresh".into(), "Export".into()]);
        let html = render_widget(&store(), &descriptor).unwrap();
        let refresh = html.as_str().find("title=\"Refresh\"").unwrap();
        let export = html.as_str().find("title=\"Export\"").unwrap();
        assert!(refresh < export);
    }

    #[test]
    fn empty_action_label_fails() {
        let descriptor =
            WidgetDescriptor::new("Scanner", Markup::trusted("<p>x</p>"), WidgetSize::Small)
                .with_actions(vec!["Refresh".into(), "  ".into()]);
        let err = render_widget(&store(), &descriptor).unwrap_err();
        assert!(matches!(err, ChartmasterError::InvalidAction { index: 1 }));
    }

    #[test]
    fn metric_card_without_change_omits_change_row() {
        let card = MetricCard {
            label: "S&P 500".into(),
            value: "5,870.62".into(),
            change: None,
            change_class: None,
        };
        let html = render_metric_card(&store(), &card);
        assert!(html.as_str().contains("S&amp;P 500"));
        assert!(!html.as_str().contains("metric-change"));
    }

    #[test]
    fn metric_card_change_class_is_caller_supplied() {
        let card = MetricCard {
            label: "NASDAQ".into(),
            value: "18,972.42".into(),
            change: Some("-0.5%".into()),
            change_class: Some("price-negative".into()),
        };
        let html = render_metric_card(&store(), &card);
        assert!(html.as_str().contains("metric-change price-negative"));
        assert!(html.as_str().contains("-0.5%"));
    }
}
