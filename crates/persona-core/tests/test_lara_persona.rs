use std::sync::Arc;
use std::thread;

use persona_core::{
    LARA_SYSTEM_PROMPT, PersonaConfig, PersonaTemplate, PromptTemplate, TemplateValues, USER_NAME,
};
use proptest::prelude::*;

const TOKEN: &str = "{{user_name}}";

#[test]
fn test_config_matches_builtin_profile() {
    let lara = PersonaTemplate::lara();
    let config = lara.config();

    assert_eq!(config, &PersonaConfig::lara());
    assert_eq!(config.name, "Lara");
    assert_eq!(config.age, 24);
    assert_eq!(config.nationality, "Yarı Rus");
    assert_eq!(config.platform, "Telegram");
    assert_eq!(
        config.personality,
        vec!["flörtöz", "profesyonel", "şakacı", "duygusal", "kıvrak zekâlı"]
    );
    assert_eq!(config.languages.len(), 2);
    assert_eq!(config.languages[0], "Türkçe");
    assert_eq!(config.languages[1], "Rusça (kısmi)");
}

#[test]
fn test_version_is_semver() {
    let lara = PersonaTemplate::lara();
    let text = lara.version().to_string();

    assert!(!text.is_empty());
    assert_eq!(semver::Version::parse(&text).unwrap(), *lara.version());
    assert_eq!(PersonaTemplate::lara().version(), lara.version());
}

#[test]
fn test_raw_template_export() {
    let lara = PersonaTemplate::lara();
    assert_eq!(lara.system_prompt().source(), LARA_SYSTEM_PROMPT);
    assert_eq!(lara.system_prompt().occurrences(USER_NAME), 1);
}

#[test]
fn test_strict_render_matches_greeting() {
    let lara = PersonaTemplate::lara();
    let values = TemplateValues::new().with(USER_NAME, "Ahmet");

    assert_eq!(
        lara.system_prompt().render(&values).unwrap(),
        lara.render_greeting("Ahmet")
    );
}

#[test]
fn test_concurrent_renders_are_independent() {
    let lara = Arc::new(PersonaTemplate::lara());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let lara = Arc::clone(&lara);
            thread::spawn(move || {
                let name = format!("user-{}", i);
                (name.clone(), lara.render_greeting(&name))
            })
        })
        .collect();

    for handle in handles {
        let (name, rendered) = handle.join().unwrap();
        assert_eq!(rendered, LARA_SYSTEM_PROMPT.replacen(TOKEN, &name, 1));
    }
    assert_eq!(lara.system_prompt().source(), LARA_SYSTEM_PROMPT);
}

#[test]
fn test_permissive_fill_on_template_without_placeholder() {
    let template = PromptTemplate::new("Merhaba!");
    assert_eq!(template.fill(USER_NAME, "Ahmet"), "Merhaba!");
}

// === Property-Based Tests ===

proptest! {
    #[test]
    fn test_greeting_contains_name_not_token(name in "[^{}]{0,40}") {
        let rendered = PersonaTemplate::lara().render_greeting(&name);
        prop_assert!(rendered.contains(name.as_str()));
        prop_assert!(!rendered.contains(TOKEN));
    }

    #[test]
    fn test_greeting_length(name in "\\PC{0,40}") {
        let rendered = PersonaTemplate::lara().render_greeting(&name);
        prop_assert_eq!(
            rendered.len(),
            LARA_SYSTEM_PROMPT.len() - TOKEN.len() + name.len()
        );
        prop_assert_eq!(
            rendered.chars().count(),
            LARA_SYSTEM_PROMPT.chars().count() - TOKEN.chars().count() + name.chars().count()
        );
    }

    #[test]
    fn test_greeting_is_literal_substitution(name in "\\PC{0,40}") {
        let rendered = PersonaTemplate::lara().render_greeting(&name);
        prop_assert_eq!(rendered, LARA_SYSTEM_PROMPT.replacen(TOKEN, &name, 1));
    }
}
