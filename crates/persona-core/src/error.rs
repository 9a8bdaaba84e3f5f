//! Error types for persona construction and prompt rendering.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the persona crate.
///
/// The everyday operations on a built persona (`render_greeting`, `config`,
/// `version`) never fail. These variants cover the fallible edges: building a
/// persona from custom data, strict multi-value rendering, and TOML definitions.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonaError {
    /// A persona config field violates its constraint
    #[error("Invalid persona config: `{field}` {reason}")]
    InvalidConfig { field: String, reason: String },

    /// A required placeholder does not appear exactly once
    #[error("Placeholder `{{{{{name}}}}}` must appear exactly once, found {found}")]
    PlaceholderCount { name: String, found: usize },

    /// The template contains a placeholder nobody will fill
    #[error("Unexpected placeholder `{{{{{0}}}}}` in template")]
    UnexpectedPlaceholder(String),

    /// Strict rendering found a placeholder without a value
    #[error("No value supplied for placeholder `{0}`")]
    MissingValue(String),

    /// Strict rendering was given a value that no placeholder uses
    #[error("Value `{0}` does not match any placeholder")]
    UnusedValue(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Prompt revision is not a semantic version
    #[error("Version error: {0}")]
    Version(String),
}

impl PersonaError {
    /// Creates an InvalidConfig error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a PlaceholderCount error
    pub fn placeholder_count(name: impl Into<String>, found: usize) -> Self {
        Self::PlaceholderCount {
            name: name.into(),
            found,
        }
    }

    /// Check if this is a config error
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }

    /// Check if this error comes from the template content rather than caller input.
    ///
    /// Integrity problems are authoring bugs in the prompt text; missing or
    /// unused values are mistakes by whoever called `render`.
    pub fn is_template_integrity(&self) -> bool {
        matches!(
            self,
            Self::PlaceholderCount { .. } | Self::UnexpectedPlaceholder(_)
        )
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

impl From<toml::de::Error> for PersonaError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for PersonaError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<semver::Error> for PersonaError {
    fn from(err: semver::Error) -> Self {
        Self::Version(err.to_string())
    }
}

/// A type alias for `Result<T, PersonaError>`.
pub type Result<T> = std::result::Result<T, PersonaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_messages_show_braces() {
        let err = PersonaError::placeholder_count("user_name", 2);
        assert_eq!(
            err.to_string(),
            "Placeholder `{{user_name}}` must appear exactly once, found 2"
        );

        let err = PersonaError::UnexpectedPlaceholder("mood".to_string());
        assert_eq!(err.to_string(), "Unexpected placeholder `{{mood}}` in template");
    }

    #[test]
    fn test_predicates() {
        assert!(PersonaError::invalid_config("age", "must be positive").is_invalid_config());
        assert!(PersonaError::placeholder_count("x", 0).is_template_integrity());
        assert!(PersonaError::UnexpectedPlaceholder("x".into()).is_template_integrity());
        assert!(!PersonaError::MissingValue("x".into()).is_template_integrity());
    }

    #[test]
    fn test_from_semver_error() {
        let err: PersonaError = semver::Version::parse("two").unwrap_err().into();
        assert!(matches!(err, PersonaError::Version(_)));
    }

    #[test]
    fn test_from_toml_error() {
        let err: PersonaError = toml::from_str::<toml::Value>("= broken").unwrap_err().into();
        assert!(err.is_serialization());
        assert!(err.to_string().starts_with("Serialization error: TOML"));
    }
}
