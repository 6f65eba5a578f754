use crate::i18n::{Language, SourceLanguage};
use anyhow::{Context, Result};

pub const DEFAULT_TRANSLATE_API_URL: &str = "https://translate.googleapis.com/translate_a/single";

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Translation provider
    pub translate_api_url: String,
    pub translate_timeout_secs: u64,
    pub source_language: SourceLanguage,
    pub default_target_language: Language,

    // Limits
    pub max_message_chars: usize,
    pub broadcast_capacity: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let source = std::env::var("SOURCE_LANGUAGE").unwrap_or_else(|_| "auto".to_string());
        let target =
            std::env::var("DEFAULT_TARGET_LANGUAGE").unwrap_or_else(|_| "te".to_string());

        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_env("PORT", 5000),

            // Translation provider
            translate_api_url: std::env::var("TRANSLATE_API_URL")
                .unwrap_or_else(|_| DEFAULT_TRANSLATE_API_URL.to_string()),
            translate_timeout_secs: parse_env("TRANSLATE_TIMEOUT_SECS", 10),
            source_language: SourceLanguage::parse(&source)
                .context("SOURCE_LANGUAGE is not a supported language")?,
            default_target_language: Language::parse(&target)
                .context("DEFAULT_TARGET_LANGUAGE is not a supported language")?,

            // Limits
            // Zero falls back to the default
            max_message_chars: match parse_env("MAX_MESSAGE_CHARS", 5000) {
                0 => 5000,
                n => n,
            },
            broadcast_capacity: parse_env("BROADCAST_CAPACITY", 256).max(1),
        })
    }

    /// Address the HTTP server binds to, as `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            translate_api_url: DEFAULT_TRANSLATE_API_URL.to_string(),
            translate_timeout_secs: 10,
            source_language: SourceLanguage::Auto,
            default_target_language: Language::TELUGU,
            max_message_chars: 5000,
            broadcast_capacity: 256,
        }
    }
}

/// Read a numeric variable, falling back to `default` when unset or unparsable.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "HOST",
        "PORT",
        "TRANSLATE_API_URL",
        "TRANSLATE_TIMEOUT_SECS",
        "SOURCE_LANGUAGE",
        "DEFAULT_TARGET_LANGUAGE",
        "MAX_MESSAGE_CHARS",
        "BROADCAST_CAPACITY",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().expect("defaults should load");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.translate_api_url, DEFAULT_TRANSLATE_API_URL);
        assert_eq!(config.translate_timeout_secs, 10);
        assert_eq!(config.source_language, SourceLanguage::Auto);
        assert_eq!(config.default_target_language, Language::TELUGU);
        assert_eq!(config.max_message_chars, 5000);
        assert_eq!(config.broadcast_capacity, 256);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "8080");
        std::env::set_var("SOURCE_LANGUAGE", "english");
        std::env::set_var("DEFAULT_TARGET_LANGUAGE", "hi");
        std::env::set_var("MAX_MESSAGE_CHARS", "100");

        let config = Config::from_env().expect("overrides should load");
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.source_language, SourceLanguage::Fixed(Language::ENGLISH));
        assert_eq!(config.default_target_language.code(), "hi");
        assert_eq!(config.max_message_chars, 100);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_numbers_fall_back() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        std::env::set_var("BROADCAST_CAPACITY", "0");

        let config = Config::from_env().expect("should fall back");
        assert_eq!(config.port, 5000);
        assert_eq!(config.broadcast_capacity, 1);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_zero_message_limit_falls_back() {
        clear_env();
        std::env::set_var("MAX_MESSAGE_CHARS", "0");

        let config = Config::from_env().expect("should fall back");
        assert_eq!(config.max_message_chars, 5000);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_unknown_target_language() {
        clear_env();
        std::env::set_var("DEFAULT_TARGET_LANGUAGE", "klingon");

        let err = Config::from_env().unwrap_err();
        assert!(format!("{:#}", err).contains("DEFAULT_TARGET_LANGUAGE"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_unknown_source_language() {
        clear_env();
        std::env::set_var("SOURCE_LANGUAGE", "klingon");

        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    fn test_default_matches_env_defaults() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.default_target_language, Language::TELUGU);
    }
}
