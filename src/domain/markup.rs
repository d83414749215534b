//! Trusted markup value type.
//!
//! The trust boundary between caller-supplied text and engine-generated
//! structure is carried by the type system: a [`Markup`] can only be built
//! by escaping plain text or by explicitly vouching for a fragment with
//! [`Markup::trusted`]. Renderers emit existing `Markup` verbatim and never
//! re-escape it.

use std::fmt;

/// A fragment of HTML known to be safe to emit verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Markup(String);

impl Markup {
    /// Empty fragment.
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Accept `raw` as already-trusted markup.
    ///
    /// This is the engine's explicit trust boundary: callers are responsible
    /// for ensuring `raw` originates from trusted templates, never from raw
    /// user input.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// HTML-escape plain text into a trusted fragment.
    pub fn escape(text: &str) -> Self {
        Self(escape_text(text))
    }

    pub fn push(&mut self, other: &Markup) {
        self.0.push_str(&other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Extend<Markup> for Markup {
    fn extend<T: IntoIterator<Item = Markup>>(&mut self, iter: T) {
        for part in iter {
            self.0.push_str(&part.0);
        }
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<T: IntoIterator<Item = Markup>>(iter: T) -> Self {
        let mut out = Markup::new();
        out.extend(iter);
        out
    }
}

/// Escape text for use in HTML element content or attribute values.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
