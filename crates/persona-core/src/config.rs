//! TOML persona definitions.
//!
//! Alternative personas are described as TOML text and turned into a
//! [`PersonaTemplate`]. Reading the text from disk is left to the caller.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::persona::{PersonaConfig, PersonaTemplate};
use crate::template::PromptTemplate;

/// Prompt texts of a definition.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PromptSources {
    /// Prompt for the first message, with one `{{user_name}}`
    pub system: String,
    /// Prompt for later turns, with one `{{user_name}}`
    pub continuation: String,
}

/// Root of a persona definition document.
///
/// ```toml
/// version = "1.0.0"
///
/// [persona]
/// name = "Lara"
/// age = 24
/// nationality = "Yarı Rus"
/// platform = "Telegram"
/// personality = ["şakacı"]
/// languages = ["Türkçe"]
///
/// [prompts]
/// system = "Merhaba {{user_name}}"
/// continuation = "Devam {{user_name}}"
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PersonaDefinition {
    /// Prompt revision (semantic version)
    pub version: String,
    pub persona: PersonaConfig,
    pub prompts: PromptSources,
}

impl PersonaDefinition {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validates the definition and builds the persona from it.
    pub fn into_template(self) -> Result<PersonaTemplate> {
        let version = semver::Version::parse(&self.version)?;
        tracing::debug!(persona = %self.persona.name, %version, "loading persona definition");
        PersonaTemplate::new(
            self.persona,
            PromptTemplate::new(self.prompts.system),
            PromptTemplate::new(self.prompts.continuation),
            version,
        )
    }
}

impl PersonaTemplate {
    /// Parses and validates a TOML persona definition.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        PersonaDefinition::from_toml_str(content)?.into_template()
    }

    /// Exports this persona as a definition.
    pub fn to_definition(&self) -> PersonaDefinition {
        PersonaDefinition {
            version: self.version().to_string(),
            persona: self.config().clone(),
            prompts: PromptSources {
                system: self.system_prompt().source().to_string(),
                continuation: self.continuation_prompt().source().to_string(),
            },
        }
    }
}
