//! Named-placeholder prompt templates.
//!
//! A placeholder is `{{name}}`, optionally padded with spaces inside the
//! braces (`{{ name }}`), where `name` is an identifier. Everything else in
//! the source, including lone braces, is literal text.
//!
//! Substitution is a single literal pass over the source: values are inserted
//! verbatim and never rescanned, so a value that itself looks like a
//! placeholder stays as written.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{PersonaError, Result};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{ *([A-Za-z_][A-Za-z0-9_]*) *\}\}").expect("placeholder pattern is valid")
});

/// One placeholder occurrence inside a template source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    name: String,
    span: Range<usize>,
}

impl Placeholder {
    /// Identifier between the braces.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Byte range of the whole token, braces included.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

/// Values for strict rendering, keyed by placeholder name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateValues {
    values: BTreeMap<String, String>,
}

impl TemplateValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, replacing any earlier value for the same name.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A prompt text with its placeholders located once, up front.
///
/// The source is never modified; every render allocates a fresh `String`,
/// so one template can be shared freely between threads and callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    source: Cow<'static, str>,
    placeholders: Vec<Placeholder>,
}

impl PromptTemplate {
    /// Scans `source` for placeholders.
    ///
    /// Scanning never fails; use [`PromptTemplate::expect_exactly_once`] or
    /// [`PromptTemplate::render`] to enforce what a caller needs.
    pub fn new(source: impl Into<Cow<'static, str>>) -> Self {
        let source = source.into();
        let placeholders = PLACEHOLDER
            .captures_iter(&source)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let name = caps.get(1)?;
                Some(Placeholder {
                    name: name.as_str().to_string(),
                    span: whole.range(),
                })
            })
            .collect();

        Self {
            source,
            placeholders,
        }
    }

    /// The raw template text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// All placeholder occurrences in order of appearance.
    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    /// Distinct placeholder names in order of first appearance.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for placeholder in &self.placeholders {
            if !names.contains(&placeholder.name()) {
                names.push(placeholder.name());
            }
        }
        names
    }

    /// Number of times `name` occurs.
    pub fn occurrences(&self, name: &str) -> usize {
        self.placeholders.iter().filter(|p| p.name == name).count()
    }

    /// Fails unless `name` occurs exactly once.
    pub fn expect_exactly_once(&self, name: &str) -> Result<()> {
        match self.occurrences(name) {
            1 => Ok(()),
            found => Err(PersonaError::placeholder_count(name, found)),
        }
    }

    /// Replaces the first occurrence of `name` with `value`.
    ///
    /// This is the permissive path: other placeholders are left as they are,
    /// and if `name` does not occur the source is returned unchanged.
    pub fn fill(&self, name: &str, value: &str) -> String {
        let Some(placeholder) = self.placeholders.iter().find(|p| p.name == name) else {
            tracing::trace!(placeholder = name, "placeholder absent, returning template as is");
            return self.source.to_string();
        };

        let Range { start, end } = placeholder.span;
        let mut out = String::with_capacity(self.source.len() - (end - start) + value.len());
        out.push_str(&self.source[..start]);
        out.push_str(value);
        out.push_str(&self.source[end..]);
        out
    }

    /// Replaces every placeholder with its value from `values`.
    ///
    /// Every placeholder must have a value and every value must be used.
    pub fn render(&self, values: &TemplateValues) -> Result<String> {
        if let Some(missing) = self
            .placeholders
            .iter()
            .find(|p| values.get(&p.name).is_none())
        {
            tracing::debug!(placeholder = %missing.name, "render missing value");
            return Err(PersonaError::MissingValue(missing.name.clone()));
        }

        if let Some(unused) = values
            .values
            .keys()
            .find(|name| self.occurrences(name) == 0)
        {
            tracing::debug!(value = %unused, "render got unused value");
            return Err(PersonaError::UnusedValue(unused.clone()));
        }

        let mut out = String::with_capacity(self.source.len());
        let mut cursor = 0;
        for placeholder in &self.placeholders {
            out.push_str(&self.source[cursor..placeholder.span.start]);
            // presence checked above
            out.push_str(values.get(&placeholder.name).unwrap_or_default());
            cursor = placeholder.span.end;
        }
        out.push_str(&self.source[cursor..]);

        tracing::trace!(
            placeholders = self.placeholders.len(),
            bytes = out.len(),
            "rendered template"
        );
        Ok(out)
    }
}

impl fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl AsRef<str> for PromptTemplate {
    fn as_ref(&self) -> &str {
        &self.source
    }
}

impl From<&'static str> for PromptTemplate {
    fn from(source: &'static str) -> Self {
        Self::new(source)
    }
}

impl From<String> for PromptTemplate {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}
