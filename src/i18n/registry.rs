//! Language registry: Single source of truth for all supported languages.
//!
//! This module lists every language the translation provider accepts as a
//! target. It uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access.

use serde_json::{Map, Value};
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Provider language code (e.g., "te", "zh-CN")
    pub code: &'static str,

    /// Lowercase English name of the language (e.g., "telugu")
    pub name: &'static str,
}

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter. Languages are
/// kept sorted by name, which is also the order `/languages` reports them in.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: provider_languages(),
        })
    }

    /// Get a language configuration by its provider code (case-insensitive).
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages
            .iter()
            .find(|lang| lang.code.eq_ignore_ascii_case(code))
    }

    /// Get a language configuration by its English name (case-insensitive).
    pub fn get_by_name(&self, name: &str) -> Option<&LanguageConfig> {
        self.languages
            .iter()
            .find(|lang| lang.name.eq_ignore_ascii_case(name))
    }

    /// Resolve either a code or a name, codes first.
    ///
    /// Surrounding whitespace is ignored.
    pub fn lookup(&self, name_or_code: &str) -> Option<&LanguageConfig> {
        let key = name_or_code.trim();
        self.get_by_code(key).or_else(|| self.get_by_name(key))
    }

    /// Get all languages.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Names of all supported languages, in registry order.
    pub fn names(&self) -> Vec<&'static str> {
        self.languages.iter().map(|lang| lang.name).collect()
    }

    /// All supported languages as a `{name: code}` JSON object.
    pub fn as_dict(&self) -> Map<String, Value> {
        self.languages
            .iter()
            .map(|lang| (lang.name.to_string(), Value::from(lang.code)))
            .collect()
    }
}

/// The provider's supported target languages.
fn provider_languages() -> Vec<LanguageConfig> {
    const LANGUAGES: &[(&str, &str)] = &[
        ("afrikaans", "af"),
        ("albanian", "sq"),
        ("amharic", "am"),
        ("arabic", "ar"),
        ("armenian", "hy"),
        ("assamese", "as"),
        ("aymara", "ay"),
        ("azerbaijani", "az"),
        ("bambara", "bm"),
        ("basque", "eu"),
        ("belarusian", "be"),
        ("bengali", "bn"),
        ("bhojpuri", "bho"),
        ("bosnian", "bs"),
        ("bulgarian", "bg"),
        ("catalan", "ca"),
        ("cebuano", "ceb"),
        ("chichewa", "ny"),
        ("chinese (simplified)", "zh-CN"),
        ("chinese (traditional)", "zh-TW"),
        ("corsican", "co"),
        ("croatian", "hr"),
        ("czech", "cs"),
        ("danish", "da"),
        ("dhivehi", "dv"),
        ("dogri", "doi"),
        ("dutch", "nl"),
        ("english", "en"),
        ("esperanto", "eo"),
        ("estonian", "et"),
        ("ewe", "ee"),
        ("filipino", "tl"),
        ("finnish", "fi"),
        ("french", "fr"),
        ("frisian", "fy"),
        ("galician", "gl"),
        ("georgian", "ka"),
        ("german", "de"),
        ("greek", "el"),
        ("guarani", "gn"),
        ("gujarati", "gu"),
        ("haitian creole", "ht"),
        ("hausa", "ha"),
        ("hawaiian", "haw"),
        ("hebrew", "iw"),
        ("hindi", "hi"),
        ("hmong", "hmn"),
        ("hungarian", "hu"),
        ("icelandic", "is"),
        ("igbo", "ig"),
        ("ilocano", "ilo"),
        ("indonesian", "id"),
        ("irish", "ga"),
        ("italian", "it"),
        ("japanese", "ja"),
        ("javanese", "jw"),
        ("kannada", "kn"),
        ("kazakh", "kk"),
        ("khmer", "km"),
        ("kinyarwanda", "rw"),
        ("konkani", "gom"),
        ("korean", "ko"),
        ("krio", "kri"),
        ("kurdish (kurmanji)", "ku"),
        ("kurdish (sorani)", "ckb"),
        ("kyrgyz", "ky"),
        ("lao", "lo"),
        ("latin", "la"),
        ("latvian", "lv"),
        ("lingala", "ln"),
        ("lithuanian", "lt"),
        ("luganda", "lg"),
        ("luxembourgish", "lb"),
        ("macedonian", "mk"),
        ("maithili", "mai"),
        ("malagasy", "mg"),
        ("malay", "ms"),
        ("malayalam", "ml"),
        ("maltese", "mt"),
        ("maori", "mi"),
        ("marathi", "mr"),
        ("meiteilon (manipuri)", "mni-Mtei"),
        ("mizo", "lus"),
        ("mongolian", "mn"),
        ("myanmar", "my"),
        ("nepali", "ne"),
        ("norwegian", "no"),
        ("odia (oriya)", "or"),
        ("oromo", "om"),
        ("pashto", "ps"),
        ("persian", "fa"),
        ("polish", "pl"),
        ("portuguese", "pt"),
        ("punjabi", "pa"),
        ("quechua", "qu"),
        ("romanian", "ro"),
        ("russian", "ru"),
        ("samoan", "sm"),
        ("sanskrit", "sa"),
        ("scots gaelic", "gd"),
        ("sepedi", "nso"),
        ("serbian", "sr"),
        ("sesotho", "st"),
        ("shona", "sn"),
        ("sindhi", "sd"),
        ("sinhala", "si"),
        ("slovak", "sk"),
        ("slovenian", "sl"),
        ("somali", "so"),
        ("spanish", "es"),
        ("sundanese", "su"),
        ("swahili", "sw"),
        ("swedish", "sv"),
        ("tajik", "tg"),
        ("tamil", "ta"),
        ("tatar", "tt"),
        ("telugu", "te"),
        ("thai", "th"),
        ("tigrinya", "ti"),
        ("tsonga", "ts"),
        ("turkish", "tr"),
        ("turkmen", "tk"),
        ("twi", "ak"),
        ("ukrainian", "uk"),
        ("urdu", "ur"),
        ("uyghur", "ug"),
        ("uzbek", "uz"),
        ("vietnamese", "vi"),
        ("welsh", "cy"),
        ("xhosa", "xh"),
        ("yiddish", "yi"),
        ("yoruba", "yo"),
        ("zulu", "zu"),
    ];

    LANGUAGES
        .iter()
        .map(|&(name, code)| LanguageConfig { code, name })
        .collect()
}
