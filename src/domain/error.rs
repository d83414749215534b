//! Engine error types.

use crate::domain::tokens::TokenCategory;

/// Top-level error type for chartmaster.
///
/// Every variant except `Io` indicates a caller or configuration defect:
/// rendering is deterministic, so a failed call fails identically on retry
/// and nothing here is retried. The one graceful-degradation path in the
/// engine (a missing stylesheet) is handled inside the theme loader and
/// never surfaces as an error.
#[derive(Debug, thiserror::Error)]
pub enum ChartmasterError {
    #[error("unknown design token --{category}-{key}")]
    UnknownToken {
        category: TokenCategory,
        key: String,
    },

    #[error("token store is frozen; cannot define --{category}-{key}")]
    ImmutableState {
        category: TokenCategory,
        key: String,
    },

    #[error("token store already loaded from a different source")]
    AlreadyLoaded,

    #[error("invalid widget size {size:?} (expected small, medium or large)")]
    InvalidSize { size: String },

    #[error("empty action label at index {index}")]
    InvalidAction { index: usize },

    #[error("row {row} has {actual} cells, expected {expected} to match headers")]
    ArityMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&ChartmasterError> for std::process::ExitCode {
    fn from(err: &ChartmasterError) -> Self {
        let code: u8 = match err {
            ChartmasterError::Io(_) => 1,
            ChartmasterError::ConfigParse { .. } | ChartmasterError::ConfigMissing { .. } => 2,
            ChartmasterError::UnknownToken { .. }
            | ChartmasterError::ImmutableState { .. }
            | ChartmasterError::AlreadyLoaded => 3,
            ChartmasterError::InvalidSize { .. }
            | ChartmasterError::InvalidAction { .. }
            | ChartmasterError::ArityMismatch { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_mismatch_names_offending_row() {
        let err = ChartmasterError::ArityMismatch {
            row: 2,
            expected: 3,
            actual: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("row 2"));
        assert!(msg.contains("5 cells"));
        assert!(msg.contains("expected 3"));
    }

    #[test]
    fn unknown_token_displays_css_name() {
        let err = ChartmasterError::UnknownToken {
            category: TokenCategory::Color,
            key: "accent-blue".into(),
        };
        assert_eq!(err.to_string(), "unknown design token --color-accent-blue");
    }
}
