//! Language support for the relay.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the provider's supported languages
//! - `language`: Validated `Language` / `SourceLanguage` types
//! - `metrics`: Translation counters for observability
//!
//! # Example
//!
//! ```rust,ignore
//! use chat_translate_relay::i18n::{Language, LanguageRegistry};
//!
//! let telugu = Language::parse("telugu")?;
//! let names = LanguageRegistry::get().names();
//! ```

mod language;
mod metrics;
mod registry;

pub use language::{Language, SourceLanguage};
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
