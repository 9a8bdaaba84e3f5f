//! Persona domain module.
//!
//! # Module Structure
//!
//! - `model`: `PersonaConfig`, the structured profile of a character
//! - `preset`: the built-in Lara persona and her prompt texts
//! - `bundle`: `PersonaTemplate`, a profile plus the prompts that voice it
//!
//! # Usage
//!
//! ```
//! use persona_core::persona::PersonaTemplate;
//!
//! let lara = PersonaTemplate::lara();
//! let prompt = lara.render_greeting("Ahmet");
//! assert!(prompt.contains("Kullanıcının adı: Ahmet"));
//! assert_eq!(lara.config().age, 24);
//! ```

mod bundle;
mod model;
mod preset;

// Re-export public API
pub use bundle::PersonaTemplate;
pub use model::PersonaConfig;
pub use preset::{LARA_CONTINUATION_PROMPT, LARA_PROMPT_VERSION, LARA_SYSTEM_PROMPT, USER_NAME};
