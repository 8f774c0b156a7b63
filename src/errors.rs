//! Error type for the I/O edges of the assessment.
//!
//! The scoring engine is total and never returns an error. Everything that can
//! fail lives around it: reading response files, parsing configuration,
//! normalizing raw answers, and validating the catalog.
//!
//! # Error Codes
//!
//! - E001-E009: I/O errors
//! - E010-E019: Parse errors
//! - E020-E029: Configuration errors
//! - E030-E039: Answer normalization errors
//! - E050-E059: Catalog validation errors
//!
//! ```rust
//! use cci_assessment::errors::AssessmentError;
//!
//! let err = AssessmentError::invalid_answer("comm_tone_1", "position 9 outside 1..=5");
//! assert_eq!(err.code(), "E030");
//! assert!(err.is_user_fixable());
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration error{}: {message}", path_suffix(.path))]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("invalid answer for '{question_id}': {reason}")]
    InvalidAnswer { question_id: String, reason: String },

    #[error("question catalog has {count} issue(s)")]
    CatalogInvalid { count: usize },
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

impl AssessmentError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn parse(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn config(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path,
        }
    }

    pub fn invalid_answer(question_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAnswer {
            question_id: question_id.into(),
            reason: reason.into(),
        }
    }

    /// Stable code for documentation lookup.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => "E001",
                std::io::ErrorKind::PermissionDenied => "E002",
                _ => "E009",
            },
            Self::Parse { .. } => "E010",
            Self::Config { .. } => "E020",
            Self::InvalidAnswer { .. } => "E030",
            Self::CatalogInvalid { .. } => "E050",
        }
    }

    /// Whether the person running the tool can fix this by changing input.
    pub fn is_user_fixable(&self) -> bool {
        match self {
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            Self::Parse { .. } | Self::Config { .. } | Self::InvalidAnswer { .. } => true,
            Self::CatalogInvalid { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssessmentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_codes_follow_error_kind() {
        let missing = AssessmentError::io(
            "responses.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(missing.code(), "E001");
        assert!(missing.is_user_fixable());

        let denied = AssessmentError::io(
            "responses.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no"),
        );
        assert_eq!(denied.code(), "E002");
        assert!(!denied.is_user_fixable());
    }

    #[test]
    fn test_config_message_includes_path_when_known() {
        let err = AssessmentError::config("bad weights", Some(PathBuf::from("/tmp/.cci.toml")));
        assert_eq!(
            err.to_string(),
            "configuration error in /tmp/.cci.toml: bad weights"
        );

        let err = AssessmentError::config("bad weights", None);
        assert_eq!(err.to_string(), "configuration error: bad weights");
    }

    #[test]
    fn test_catalog_errors_are_not_user_fixable() {
        let err = AssessmentError::CatalogInvalid { count: 2 };
        assert_eq!(err.code(), "E050");
        assert!(!err.is_user_fixable());
        assert_eq!(err.to_string(), "question catalog has 2 issue(s)");
    }

    #[test]
    fn test_parse_error_wraps_serde_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AssessmentError::parse("responses.json", source);
        assert_eq!(err.code(), "E010");
        assert!(err.to_string().starts_with("failed to parse responses.json"));
    }
}
