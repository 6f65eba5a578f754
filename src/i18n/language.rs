//! Language type: Validated language representation.
//!
//! A `Language` can only be constructed for entries present in the
//! registry, so holding one means the provider accepts it as a target.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Provider language code (e.g., "te", "zh-CN")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const TELUGU: Language = Language { code: "te" };

    /// Create a Language from a language code or English name.
    ///
    /// # Returns
    /// * `Ok(Language)` if the input matches a supported language
    /// * `Err` if it does not
    ///
    /// # Example
    /// ```ignore
    /// let telugu = Language::parse("telugu")?;
    /// assert_eq!(telugu, Language::parse("te")?);
    /// ```
    pub fn parse(name_or_code: &str) -> Result<Language> {
        match LanguageRegistry::get().lookup(name_or_code) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unknown language: '{}'", name_or_code.trim()),
        }
    }

    /// Get the provider language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed via `parse` or constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the lowercase English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code)
    }
}

/// Language a message is translated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLanguage {
    /// Let the provider detect the language
    Auto,
    Fixed(Language),
}

impl SourceLanguage {
    /// Parse `auto` (any case) or a supported language name/code.
    pub fn parse(value: &str) -> Result<SourceLanguage> {
        if value.trim().eq_ignore_ascii_case("auto") {
            return Ok(SourceLanguage::Auto);
        }
        Language::parse(value).map(SourceLanguage::Fixed)
    }

    /// Code sent to the provider as `sl`.
    pub fn code(&self) -> &'static str {
        match self {
            SourceLanguage::Auto => "auto",
            SourceLanguage::Fixed(language) => language.code(),
        }
    }
}
