//! Shared helpers for integration tests.

use chartmaster::domain::error::ChartmasterError;
use chartmaster::domain::theme::FALLBACK_STYLESHEET;
use chartmaster::domain::tokens::TokenStore;
use chartmaster::ports::theme_port::ThemeSourcePort;

/// Theme source backed by an in-memory stylesheet, or by nothing at all to
/// exercise the missing-resource path.
pub struct MockThemeSource {
    css: Option<String>,
}

impl MockThemeSource {
    pub fn with_css(css: &str) -> Self {
        Self {
            css: Some(css.to_string()),
        }
    }

    pub fn missing() -> Self {
        Self { css: None }
    }
}

impl ThemeSourcePort for MockThemeSource {
    fn read_stylesheet(&self) -> Result<String, ChartmasterError> {
        self.css.clone().ok_or_else(|| {
            ChartmasterError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "design-system.css",
            ))
        })
    }
}

pub fn sample_store() -> TokenStore {
    TokenStore::from_stylesheet(FALLBACK_STYLESHEET).unwrap()
}

pub fn market_headers() -> Vec<String> {
    vec!["Symbol".into(), "Price".into(), "Change %".into()]
}

pub fn market_rows() -> Vec<Vec<String>> {
    vec![
        vec!["AAPL".into(), "$175.50".into(), "+1.2%".into()],
        vec!["MSFT".into(), "$378.20".into(), "-0.5%".into()],
    ]
}

/// Sign-of-last-column styling policy. Lives on the caller side; the table
/// renderer only applies the class it returns.
pub fn sign_classifier(cells: &[String]) -> Option<String> {
    let last = cells.last()?;
    if last.starts_with('+') {
        Some("positive".into())
    } else if last.starts_with('-') {
        Some("negative".into())
    } else {
        None
    }
}
