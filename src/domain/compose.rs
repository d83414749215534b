//! Page assembly by concatenation.
//!
//! The engine-side half of the composition contract: a page calls the theme
//! loader once, the header renderer once, then any sequence of body
//! renderers, pushing each result here in call order. The host treats the
//! finished document as trusted markup.

use crate::domain::markup::{Markup, escape_text};
use crate::domain::theme::ThemeStatus;

#[derive(Debug, Default)]
pub struct PageBuilder {
    title: String,
    head: Markup,
    body: Markup,
}

impl PageBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            head: Markup::new(),
            body: Markup::new(),
        }
    }

    /// Place the theme's style block (if this session just injected one)
    /// into the document head.
    pub fn theme(mut self, status: &ThemeStatus) -> Self {
        if let Some(style) = &status.style {
            self.head.push(style);
        }
        self
    }

    /// Append a rendered fragment to the body, in call order.
    pub fn push(mut self, fragment: Markup) -> Self {
        self.body.push(&fragment);
        self
    }

    /// Assemble the full HTML document.
    pub fn finish(self) -> Markup {
        let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\"><head>");
        html.push_str("<meta charset=\"utf-8\">");
        html.push_str(&format!("<title>{}</title>", escape_text(&self.title)));
        html.push_str(self.head.as_str());
        html.push_str("</head><body>");
        html.push_str(self.body.as_str());
        html.push_str("</body></html>");
        Markup::trusted(html)
    }
}
