use crate::config::Config;
use crate::i18n::{Language, SourceLanguage, TranslationMetrics};
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Check the raw message against the provider's length limit.
///
/// The limit is exclusive and counted in chars, not bytes.
pub fn validate_length(text: &str, max_chars: usize) -> Result<()> {
    let len = text.chars().count();
    if len >= max_chars {
        bail!(
            "Message is too long ({} characters, must be under {})",
            len,
            max_chars
        );
    }
    Ok(())
}

/// Extract the translated text from the provider's nested-array response.
///
/// The body looks like `[[["hola","hello",null,null,10], ...], null, "en", ...]`;
/// every segment in the first element contributes its first string.
fn parse_translation(body: &Value) -> Result<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .context("Translation response contained no translation segments")?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        bail!("Translation response contained no translation segments");
    }

    Ok(translated)
}

/// Translate a chat message into the target language.
///
/// Blank text, or a fixed source language equal to the target, is returned
/// (trimmed) without contacting the provider.
pub async fn translate_text(
    client: &reqwest::Client,
    config: &Config,
    text: &str,
    target_language: Language,
    metrics: &TranslationMetrics,
) -> Result<String> {
    validate_length(text, config.max_message_chars)?;

    let text = text.trim();
    if text.is_empty() || config.source_language == SourceLanguage::Fixed(target_language) {
        metrics.record_skipped();
        return Ok(text.to_string());
    }

    metrics.record_api_call();
    let result = request_translation(client, config, text, target_language).await;
    if result.is_err() {
        metrics.record_api_failure();
    }
    result
}

async fn request_translation(
    client: &reqwest::Client,
    config: &Config,
    text: &str,
    target_language: Language,
) -> Result<String> {
    debug!(
        "Requesting translation {} -> {} ({} chars)",
        config.source_language.code(),
        target_language.code(),
        text.chars().count()
    );

    let response = client
        .get(&config.translate_api_url)
        .query(&[
            ("client", "gtx"),
            ("sl", config.source_language.code()),
            ("tl", target_language.code()),
            ("dt", "t"),
            ("q", text),
        ])
        .timeout(Duration::from_secs(config.translate_timeout_secs))
        .send()
        .await
        .context("Failed to send request to translation provider")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        bail!("Translation provider error ({}): {}", status, body);
    }

    let body: Value = response
        .json()
        .await
        .context("Failed to parse translation provider response")?;

    parse_translation(&body)
}
