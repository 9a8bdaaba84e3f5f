//! Persona domain model.
//!
//! Structured metadata describing the simulated character, kept separate
//! from the prose prompts that voice it.

use serde::{Deserialize, Serialize};

use crate::error::{PersonaError, Result};

/// Static profile of a chat persona.
///
/// Immutable once built: consumers receive `&PersonaConfig` and the owning
/// [`PersonaTemplate`](super::PersonaTemplate) never changes its copy.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PersonaConfig {
    /// Display name of the persona
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Nationality as presented to users
    pub nationality: String,
    /// Messaging platform the persona lives on
    pub platform: String,
    /// Personality traits, most defining first
    #[serde(default)]
    pub personality: Vec<String>,
    /// Languages the persona speaks, in order of fluency
    #[serde(default)]
    pub languages: Vec<String>,
}

impl PersonaConfig {
    /// Checks field constraints, reporting the first violation.
    ///
    /// Text fields must be non-blank and `age` must be positive. The trait and
    /// language lists may be empty.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("nationality", &self.nationality),
            ("platform", &self.platform),
        ] {
            if value.trim().is_empty() {
                return Err(PersonaError::invalid_config(field, "must not be empty"));
            }
        }

        if self.age == 0 {
            return Err(PersonaError::invalid_config("age", "must be positive"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PersonaConfig {
        PersonaConfig {
            name: "Deniz".to_string(),
            age: 30,
            nationality: "Türk".to_string(),
            platform: "Telegram".to_string(),
            personality: vec![],
            languages: vec![],
        }
    }

    #[test]
    fn test_valid_config_with_empty_lists() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let config = PersonaConfig {
            name: "   ".to_string(),
            ..sample()
        };
        assert_eq!(
            config.validate(),
            Err(PersonaError::invalid_config("name", "must not be empty"))
        );
    }

    #[test]
    fn test_zero_age_rejected() {
        let config = PersonaConfig { age: 0, ..sample() };
        let err = config.validate().unwrap_err();
        assert!(err.is_invalid_config());
        assert!(err.to_string().contains("`age`"));
    }

    #[test]
    fn test_empty_platform_rejected() {
        let config = PersonaConfig {
            platform: String::new(),
            ..sample()
        };
        assert!(matches!(
            config.validate(),
            Err(PersonaError::InvalidConfig { field, .. }) if field == "platform"
        ));
    }
}
