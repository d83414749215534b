//! Theme loading with per-session idempotent style injection.

use std::collections::HashSet;
use std::sync::Mutex;

use crate::domain::markup::Markup;
use crate::ports::theme_port::ThemeSourcePort;

/// Built-in minimal theme used when the stylesheet resource is unreadable:
/// fixed dark background, base typography, base spacing, and the semantic
/// tokens the renderers resolve. The page always renders, degraded but not
/// broken.
pub const FALLBACK_STYLESHEET: &str = "\
:root {
    --color-primary-dark: #0D1B2A;
    --color-secondary-dark: #1B263B;
    --color-accent-blue: #4361EE;
    --color-positive: #10B981;
    --color-negative: #EF4444;
    --color-warning: #F59E0B;
    --color-text-primary: #FFFFFF;
    --color-text-secondary: #94A3B8;
    --spacing-sm: 8px;
    --spacing-md: 16px;
    --spacing-lg: 24px;
    --font-family-base: system-ui, sans-serif;
    --font-size-base: 14px;
    --font-size-icon: 48px;
    --shadow-modal: 0 10px 40px rgba(0, 0, 0, 0.5);
    --radius-widget: 8px;
    --duration-shimmer: 1.5s;
}
body {
    background-color: var(--color-primary-dark);
    color: var(--color-text-primary);
    font-family: var(--font-family-base);
    font-size: var(--font-size-base);
    margin: var(--spacing-md);
}
";

/// Outcome of [`ThemeLoader::ensure_loaded`].
///
/// Always a success: stylesheet failures degrade to the fallback theme and
/// surface only through [`ThemeStatus::fallback`] and a logged warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeStatus {
    /// `<style>` block to emit; `None` when this session already injected it.
    pub style: Option<Markup>,
    /// True when the fallback stylesheet was substituted.
    pub fallback: bool,
}

impl ThemeStatus {
    pub fn injected(&self) -> bool {
        self.style.is_some()
    }
}

/// Resolves the stylesheet resource and injects it exactly once per session.
pub struct ThemeLoader {
    source: Box<dyn ThemeSourcePort + Send + Sync>,
    injected: Mutex<HashSet<String>>,
}

impl ThemeLoader {
    pub fn new(source: Box<dyn ThemeSourcePort + Send + Sync>) -> Self {
        Self {
            source,
            injected: Mutex::new(HashSet::new()),
        }
    }

    /// Idempotent per session: calling N times injects the stylesheet
    /// exactly once for that session.
    pub fn ensure_loaded(&self, session_id: &str) -> ThemeStatus {
        let mut injected = self
            .injected
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if injected.contains(session_id) {
            return ThemeStatus {
                style: None,
                fallback: false,
            };
        }

        let (css, fallback) = match self.source.read_stylesheet() {
            Ok(css) => (css, false),
            Err(err) => {
                log::warn!("stylesheet resource unavailable ({err}); injecting fallback theme");
                (FALLBACK_STYLESHEET.to_string(), true)
            }
        };

        injected.insert(session_id.to_string());
        ThemeStatus {
            style: Some(Markup::trusted(format!("<style>\n{css}</style>"))),
            fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ChartmasterError;

    struct FixedSource(Option<String>);

    impl ThemeSourcePort for FixedSource {
        fn read_stylesheet(&self) -> Result<String, ChartmasterError> {
            self.0.clone().ok_or_else(|| {
                ChartmasterError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "design-system.css",
                ))
            })
        }
    }

    #[test]
    fn first_call_injects_style_block() {
        let loader = ThemeLoader::new(Box::new(FixedSource(Some("body {}".into()))));
        let status = loader.ensure_loaded("session-a");
        assert!(status.injected());
        assert!(!status.fallback);
        assert!(status.style.unwrap().as_str().contains("body {}"));
    }

    #[test]
    fn second_call_same_session_injects_nothing() {
        let loader = ThemeLoader::new(Box::new(FixedSource(Some("body {}".into()))));
        assert!(loader.ensure_loaded("session-a").injected());
        let second = loader.ensure_loaded("session-a");
        assert!(!second.injected());
        assert_eq!(second.style, None);
    }

    #[test]
    fn sessions_are_independent() {
        let loader = ThemeLoader::new(Box::new(FixedSource(Some("body {}".into()))));
        assert!(loader.ensure_loaded("session-a").injected());
        assert!(loader.ensure_loaded("session-b").injected());
        assert!(!loader.ensure_loaded("session-b").injected());
    }

    #[test]
    fn missing_resource_degrades_to_fallback() {
        let loader = ThemeLoader::new(Box::new(FixedSource(None)));
        let status = loader.ensure_loaded("session-a");
        assert!(status.injected());
        assert!(status.fallback);
        assert!(
            status
                .style
                .unwrap()
                .as_str()
                .contains("--color-primary-dark: #0D1B2A")
        );
    }

    #[test]
    fn fallback_still_counts_as_injected_for_the_session() {
        let loader = ThemeLoader::new(Box::new(FixedSource(None)));
        assert!(loader.ensure_loaded("session-a").injected());
        assert!(!loader.ensure_loaded("session-a").injected());
    }

    #[test]
    fn fallback_defines_tokens_renderers_resolve() {
        use crate::domain::tokens::{TokenCategory, TokenStore};

        let store = TokenStore::from_stylesheet(FALLBACK_STYLESHEET).unwrap();
        for key in ["positive", "negative", "warning", "accent-blue"] {
            assert!(store.get(TokenCategory::Color, key).is_ok(), "missing {key}");
        }
        assert!(store.get(TokenCategory::Duration, "shimmer").is_ok());
        assert!(store.get(TokenCategory::Typography, "size-icon").is_ok());
        assert!(store.get(TokenCategory::Shadow, "modal").is_ok());
    }
}
