//! Data table renderer.

use crate::domain::descriptor::TableDescriptor;
use crate::domain::error::ChartmasterError;
use crate::domain::markup::{Markup, escape_text};
use crate::domain::tokens::TokenStore;

/// Caller-supplied styling policy: maps a row to an optional CSS class.
///
/// The renderer has no opinion on what the class means; sign comparisons,
/// scoring thresholds and similar business semantics live entirely in the
/// caller.
pub type RowClassifier<'a> = &'a dyn Fn(&[String]) -> Option<String>;

/// Render a styled data table.
///
/// Every row's length must equal `headers`' length; the first violation
/// aborts the whole render with `ArityMismatch` carrying the offending row
/// index, and no partial table is returned. Zebra striping alternates
/// `row-even`/`row-odd` by row-index parity.
pub fn render_table(
    _tokens: &TokenStore,
    descriptor: &TableDescriptor,
    classifier: Option<RowClassifier<'_>>,
) -> Result<Markup, ChartmasterError> {
    let expected = descriptor.headers.len();
    for (row, cells) in descriptor.rows.iter().enumerate() {
        if cells.len() != expected {
            return Err(ChartmasterError::ArityMismatch {
                row,
                expected,
                actual: cells.len(),
            });
        }
    }

    let mut html = String::from("<table class=\"data-table\"><thead><tr>");
    for header in &descriptor.headers {
        let sort_affordance = if descriptor.sortable { " \u{2195}" } else { "" };
        html.push_str(&format!(
            "<th>{}{}</th>",
            escape_text(header),
            sort_affordance
        ));
    }
    html.push_str("</tr></thead><tbody>");

    for (index, cells) in descriptor.rows.iter().enumerate() {
        let parity = if index % 2 == 0 { "row-even" } else { "row-odd" };
        let class = match classifier.and_then(|classify| classify(cells)) {
            Some(extra) => format!("{} {}", parity, escape_text(&extra)),
            None => parity.to_string(),
        };
        html.push_str(&format!("<tr class=\"{class}\">"));
        for cell in cells {
            html.push_str(&format!("<td>{}</td>", escape_text(cell)));
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");
    Ok(Markup::trusted(html))
}
