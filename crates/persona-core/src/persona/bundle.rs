//! A persona together with the prompts that voice it.

use semver::Version;

use super::model::PersonaConfig;
use super::preset::{
    LARA_CONTINUATION_PROMPT, LARA_PROMPT_VERSION, LARA_SYSTEM_PROMPT, USER_NAME,
};
use crate::error::{PersonaError, Result};
use crate::template::PromptTemplate;

/// Persona config, system prompt, continuation prompt and prompt revision.
///
/// Build one at startup and hand `&PersonaTemplate` to whatever needs it
/// (a messaging client sending the greeting, an LLM call layer using the
/// prompt as a system instruction). Every accessor is read-only and every
/// render returns a new `String`, so a single value serves any number of
/// concurrent callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaTemplate {
    config: PersonaConfig,
    system_prompt: PromptTemplate,
    continuation_prompt: PromptTemplate,
    version: Version,
}

impl PersonaTemplate {
    /// Builds a persona from custom parts, failing fast on bad content.
    ///
    /// The config must pass [`PersonaConfig::validate`], and each prompt must
    /// contain `{{user_name}}` exactly once and no other placeholder.
    pub fn new(
        config: PersonaConfig,
        system_prompt: PromptTemplate,
        continuation_prompt: PromptTemplate,
        version: Version,
    ) -> Result<Self> {
        config.validate()?;
        for (kind, prompt) in [
            ("system", &system_prompt),
            ("continuation", &continuation_prompt),
        ] {
            if let Err(err) = check_prompt(prompt) {
                tracing::warn!(persona = %config.name, prompt = kind, "{}", err);
                return Err(err);
            }
        }

        tracing::debug!(persona = %config.name, %version, "persona template ready");
        Ok(Self {
            config,
            system_prompt,
            continuation_prompt,
            version,
        })
    }

    /// The built-in Lara persona.
    pub fn lara() -> Self {
        // Built-in content; covered by `test_lara_passes_integrity_checks`.
        Self {
            config: PersonaConfig::lara(),
            system_prompt: PromptTemplate::new(LARA_SYSTEM_PROMPT),
            continuation_prompt: PromptTemplate::new(LARA_CONTINUATION_PROMPT),
            version: LARA_PROMPT_VERSION,
        }
    }

    /// System prompt with `user_name` substituted in place of its placeholder.
    ///
    /// Any string is accepted, the empty string included, and inserted
    /// verbatim.
    pub fn render_greeting(&self, user_name: &str) -> String {
        tracing::trace!(persona = %self.config.name, "rendering greeting");
        self.system_prompt.fill(USER_NAME, user_name)
    }

    /// Continuation prompt with `user_name` substituted, for later turns.
    pub fn render_continuation(&self, user_name: &str) -> String {
        tracing::trace!(persona = %self.config.name, "rendering continuation");
        self.continuation_prompt.fill(USER_NAME, user_name)
    }

    pub fn config(&self) -> &PersonaConfig {
        &self.config
    }

    /// Revision of the prompt texts.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Unrendered system prompt, for callers doing their own substitution.
    pub fn system_prompt(&self) -> &PromptTemplate {
        &self.system_prompt
    }

    pub fn continuation_prompt(&self) -> &PromptTemplate {
        &self.continuation_prompt
    }
}

impl Default for PersonaTemplate {
    fn default() -> Self {
        Self::lara()
    }
}

fn check_prompt(prompt: &PromptTemplate) -> Result<()> {
    prompt.expect_exactly_once(USER_NAME)?;
    match prompt.names().into_iter().find(|name| *name != USER_NAME) {
        Some(other) => Err(PersonaError::UnexpectedPlaceholder(other.to_string())),
        None => Ok(()),
    }
}
