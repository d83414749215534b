//! Design token store.
//!
//! Tokens are named theme-level constants (`--color-accent-blue`,
//! `--spacing-md`, ...) defined once by the stylesheet resource and read by
//! every renderer. The store transitions from mutable-during-load to
//! permanently frozen: any later write attempt fails, it does not silently
//! apply. Renderers reference tokens symbolically through [`TokenStore::var`]
//! so retheming never requires renderer changes.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::error::ChartmasterError;

/// Token categories, each tied to a fixed CSS custom-property prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenCategory {
    Color,
    Spacing,
    Typography,
    Shadow,
    Radius,
    Duration,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 6] = [
        TokenCategory::Color,
        TokenCategory::Spacing,
        TokenCategory::Typography,
        TokenCategory::Shadow,
        TokenCategory::Radius,
        TokenCategory::Duration,
    ];

    /// CSS custom-property prefix, without the leading `--`.
    pub fn prefix(&self) -> &'static str {
        match self {
            TokenCategory::Color => "color",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Typography => "font",
            TokenCategory::Shadow => "shadow",
            TokenCategory::Radius => "radius",
            TokenCategory::Duration => "duration",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        TokenCategory::ALL.into_iter().find(|c| c.prefix() == prefix)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Immutable-after-load mapping from `(category, key)` to a literal value.
#[derive(Debug, Default)]
pub struct TokenStore {
    values: BTreeMap<(TokenCategory, String), String>,
    // Source text of the load that froze the store. `Some` means frozen;
    // kept so an identical re-load can be recognized as a no-op.
    source: Option<String>,
}

impl TokenStore {
    /// Empty, unloaded store. Mutable until [`TokenStore::load`] freezes it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and freeze in one step.
    pub fn from_stylesheet(source: &str) -> Result<Self, ChartmasterError> {
        let mut store = Self::new();
        store.load(source)?;
        Ok(store)
    }

    /// Define a single token. Only legal before the store is frozen.
    pub fn define(
        &mut self,
        category: TokenCategory,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ChartmasterError> {
        let key = key.into();
        if self.source.is_some() {
            return Err(ChartmasterError::ImmutableState { category, key });
        }
        self.values.insert((category, key), value.into());
        Ok(())
    }

    /// Load every recognized `--prefix-key: value;` declaration from
    /// `source` and freeze the store.
    ///
    /// A second `load` with byte-identical content is a no-op; with different
    /// content it fails with `AlreadyLoaded` rather than silently redefining
    /// tokens the process already depends on. Within one source, CSS
    /// semantics apply: the last declaration of a name wins. Custom
    /// properties with an unknown prefix are ignored.
    pub fn load(&mut self, source: &str) -> Result<(), ChartmasterError> {
        if let Some(prev) = &self.source {
            if prev == source {
                return Ok(());
            }
            return Err(ChartmasterError::AlreadyLoaded);
        }

        for (category, key, value) in parse_custom_properties(source) {
            self.values.insert((category, key), value);
        }
        if self.values.is_empty() {
            log::warn!("stylesheet source defines no design tokens");
        }
        self.source = Some(source.to_string());
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Literal value of a token.
    pub fn get(&self, category: TokenCategory, key: &str) -> Result<&str, ChartmasterError> {
        self.values
            .get(&(category, key.to_string()))
            .map(String::as_str)
            .ok_or_else(|| ChartmasterError::UnknownToken {
                category,
                key: key.to_string(),
            })
    }

    /// Symbolic CSS reference (`var(--prefix-key)`) to a token, verifying
    /// the token exists first.
    pub fn var(&self, category: TokenCategory, key: &str) -> Result<String, ChartmasterError> {
        self.get(category, key)?;
        Ok(format!("var(--{}-{})", category.prefix(), key))
    }

    /// All tokens in `(category, key, value)` order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenCategory, &str, &str)> {
        self.values
            .iter()
            .map(|((category, key), value)| (*category, key.as_str(), value.as_str()))
    }
}

fn parse_custom_properties(source: &str) -> Vec<(TokenCategory, String, String)> {
    let mut tokens = Vec::new();
    for line in source.lines() {
        let line = line.trim();
        let Some(rest) = line.strip_prefix("--") else {
            continue;
        };
        let Some((name, value)) = rest.split_once(':') else {
            continue;
        };
        let value = value.trim().trim_end_matches(';').trim();
        let Some((prefix, key)) = name.trim().split_once('-') else {
            continue;
        };
        let Some(category) = TokenCategory::from_prefix(prefix) else {
            continue;
        };
        if key.is_empty() || value.is_empty() {
            continue;
        }
        tokens.push((category, key.to_string(), value.to_string()));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
:root {
    --color-primary-dark: #0D1B2A;
    --color-accent-blue: #4361EE;
    --spacing-md: 16px;
    --font-size-base: 14px;
    --shadow-modal: 0 10px 40px rgba(0,0,0,0.4);
    --radius-widget: 12px;
    --duration-shimmer: 1.5s;
    --custom-not-a-token: 1;
}
body { color: red; }
";

    #[test]
    fn load_parses_all_categories() {
        let store = TokenStore::from_stylesheet(SAMPLE).unwrap();
        assert_eq!(
            store.get(TokenCategory::Color, "primary-dark").unwrap(),
            "#0D1B2A"
        );
        assert_eq!(store.get(TokenCategory::Spacing, "md").unwrap(), "16px");
        assert_eq!(
            store.get(TokenCategory::Typography, "size-base").unwrap(),
            "14px"
        );
        assert_eq!(
            store.get(TokenCategory::Shadow, "modal").unwrap(),
            "0 10px 40px rgba(0,0,0,0.4)"
        );
        assert_eq!(store.get(TokenCategory::Radius, "widget").unwrap(), "12px");
        assert_eq!(
            store.get(TokenCategory::Duration, "shimmer").unwrap(),
            "1.5s"
        );
    }

    #[test]
    fn unknown_prefix_is_ignored() {
        let store = TokenStore::from_stylesheet(SAMPLE).unwrap();
        assert_eq!(store.len(), 7);
    }

    #[test]
    fn get_fails_for_absent_token() {
        let store = TokenStore::from_stylesheet(SAMPLE).unwrap();
        let err = store.get(TokenCategory::Color, "missing").unwrap_err();
        assert!(matches!(
            err,
            ChartmasterError::UnknownToken {
                category: TokenCategory::Color,
                ..
            }
        ));
    }

    #[test]
    fn get_is_idempotent() {
        let store = TokenStore::from_stylesheet(SAMPLE).unwrap();
        let first = store.get(TokenCategory::Color, "accent-blue").unwrap();
        let second = store.get(TokenCategory::Color, "accent-blue").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn var_returns_symbolic_reference() {
        let store = TokenStore::from_stylesheet(SAMPLE).unwrap();
        assert_eq!(
            store.var(TokenCategory::Color, "accent-blue").unwrap(),
            "var(--color-accent-blue)"
        );
    }

    #[test]
    fn var_fails_for_absent_token() {
        let store = TokenStore::from_stylesheet(SAMPLE).unwrap();
        assert!(store.var(TokenCategory::Duration, "missing").is_err());
    }

    #[test]
    fn define_after_load_fails() {
        let mut store = TokenStore::from_stylesheet(SAMPLE).unwrap();
        let err = store
            .define(TokenCategory::Color, "late", "#fff")
            .unwrap_err();
        assert!(matches!(err, ChartmasterError::ImmutableState { .. }));
        assert!(store.get(TokenCategory::Color, "late").is_err());
    }

    #[test]
    fn define_before_load_is_allowed() {
        let mut store = TokenStore::new();
        store
            .define(TokenCategory::Color, "positive", "#10B981")
            .unwrap();
        assert_eq!(store.get(TokenCategory::Color, "positive").unwrap(), "#10B981");
    }

    #[test]
    fn identical_reload_is_noop() {
        let mut store = TokenStore::from_stylesheet(SAMPLE).unwrap();
        store.load(SAMPLE).unwrap();
        assert_eq!(store.len(), 7);
    }

    #[test]
    fn divergent_reload_fails() {
        let mut store = TokenStore::from_stylesheet(SAMPLE).unwrap();
        let err = store.load("--color-primary-dark: #000;").unwrap_err();
        assert!(matches!(err, ChartmasterError::AlreadyLoaded));
        // Original value survives.
        assert_eq!(
            store.get(TokenCategory::Color, "primary-dark").unwrap(),
            "#0D1B2A"
        );
    }

    #[test]
    fn last_declaration_wins_within_one_source() {
        let store =
            TokenStore::from_stylesheet("--spacing-md: 8px;\n--spacing-md: 16px;").unwrap();
        assert_eq!(store.get(TokenCategory::Spacing, "md").unwrap(), "16px");
    }
}
