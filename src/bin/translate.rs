//! One-shot translation through the relay's provider client, without starting the server
//!
//! Usage:
//!   cargo run --bin translate -- Hello there           # Default target language
//!   cargo run --bin translate -- --to hindi Hello there
//!
//! Optional environment variables:
//! - TRANSLATE_API_URL
//! - SOURCE_LANGUAGE (defaults to auto)
//! - DEFAULT_TARGET_LANGUAGE (defaults to te)

use anyhow::{bail, Context, Result};
use chat_translate_relay::{
    config::Config,
    i18n::{Language, TranslationMetrics},
    translation,
};
use tracing::info;

/// Split `--to <language>` from the words to translate.
fn parse_args(args: &[String]) -> Result<(Option<String>, String)> {
    let mut target = None;
    let mut words = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "--to" {
            let value = iter.next().context("--to requires a language")?;
            target = Some(value.clone());
        } else {
            words.push(arg.as_str());
        }
    }

    if words.is_empty() {
        bail!("Usage: translate [--to <language>] <text>...");
    }

    Ok((target, words.join(" ")))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translate=info".parse()?)
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (target, text) = parse_args(&args)?;

    let config = Config::from_env()?;
    let target_language = match target {
        Some(t) => Language::parse(&t)?,
        None => config.default_target_language,
    };

    info!("Translating to {}", target_language);

    let client = reqwest::Client::new();
    let metrics = TranslationMetrics::new();
    let translated =
        translation::translate_text(&client, &config, &text, target_language, &metrics).await?;

    println!("{}", translated);
    Ok(())
}
