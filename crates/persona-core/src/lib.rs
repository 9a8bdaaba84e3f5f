//! Persona configuration and prompt templates for a conversational bot.
//!
//! The crate holds a static character profile ([`PersonaConfig`]), the prose
//! prompts that voice it, and [`PersonaTemplate`], which substitutes the
//! user's name into those prompts.
//!
//! ```
//! use persona_core::{PersonaTemplate, LARA_SYSTEM_PROMPT};
//!
//! let lara = PersonaTemplate::lara();
//! let greeting = lara.render_greeting("Ahmet");
//! assert_eq!(
//!     greeting.len(),
//!     LARA_SYSTEM_PROMPT.len() - "{{user_name}}".len() + "Ahmet".len()
//! );
//! assert_eq!(lara.version().to_string(), "2.0.0");
//! ```

pub mod config;
pub mod error;
pub mod persona;
pub mod template;

pub use config::PersonaDefinition;
pub use error::{PersonaError, Result};
pub use persona::{
    LARA_CONTINUATION_PROMPT, LARA_PROMPT_VERSION, LARA_SYSTEM_PROMPT, PersonaConfig,
    PersonaTemplate, USER_NAME,
};
pub use template::{Placeholder, PromptTemplate, TemplateValues};
