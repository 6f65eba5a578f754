use anyhow::{Context, Result};
use axum::{extract::Query, routing::get, Json, Router};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::i18n::{LanguageRegistry, TranslationMetrics};
use crate::relay::{self, ChatHub};

/// Shared state handed to every request and socket connection.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
    pub hub: Arc<ChatHub>,
    pub metrics: Arc<TranslationMetrics>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let hub = ChatHub::new(config.broadcast_capacity);
        Self {
            config: Arc::new(config),
            client: reqwest::Client::new(),
            hub: Arc::new(hub),
            metrics: Arc::new(TranslationMetrics::new()),
        }
    }
}

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/languages", get(languages))
        .route("/ws", get(relay::ws_handler))
        // Allow cross-origin requests from any origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl-C.
pub async fn serve(config: Config) -> Result<()> {
    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    info!("✓ Listening on {}", listener.local_addr()?);
    info!(
        "Translating {} -> {} by default",
        config.source_language.code(),
        config.default_target_language
    );

    let state = AppState::new(config);
    let metrics = Arc::clone(&state.metrics);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down. Translation metrics: {:?}", metrics.report());
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

async fn home() -> &'static str {
    "Chat Translation API is running."
}

#[derive(Debug, Default, Deserialize)]
struct LanguagesQuery {
    as_dict: Option<String>,
}

/// GET /languages
///
/// Names of all supported languages, or a `{name: code}` object when
/// `as_dict` is truthy.
async fn languages(Query(query): Query<LanguagesQuery>) -> Json<Value> {
    let registry = LanguageRegistry::get();
    if query.as_dict.as_deref().is_some_and(is_truthy) {
        Json(Value::Object(registry.as_dict()))
    } else {
        Json(Value::from(registry.names()))
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(as_dict: Option<&str>) -> Query<LanguagesQuery> {
        Query(LanguagesQuery {
            as_dict: as_dict.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_home_banner() {
        assert_eq!(home().await, "Chat Translation API is running.");
    }

    #[tokio::test]
    async fn test_languages_as_list_by_default() {
        let Json(body) = languages(query(None)).await;

        let names = body.as_array().expect("should be a list");
        assert_eq!(names.len(), LanguageRegistry::get().list_all().len());
        assert!(names.contains(&Value::from("telugu")));
    }

    #[tokio::test]
    async fn test_languages_as_dict() {
        let Json(body) = languages(query(Some("true"))).await;

        let dict = body.as_object().expect("should be an object");
        assert_eq!(dict.get("telugu"), Some(&Value::from("te")));
        assert_eq!(dict.get("chinese (simplified)"), Some(&Value::from("zh-CN")));
    }

    #[tokio::test]
    async fn test_languages_as_dict_false() {
        let Json(body) = languages(query(Some("false"))).await;
        assert!(body.is_array());
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy("true"));
        assert!(is_truthy("TRUE"));
        assert!(is_truthy("1"));
        assert!(is_truthy("yes"));
        assert!(!is_truthy("false"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy(""));
    }

    #[test]
    fn test_app_state_uses_config() {
        let state = AppState::new(Config {
            broadcast_capacity: 4,
            ..Config::default()
        });
        assert_eq!(state.config.port, 5000);
        assert_eq!(state.hub.subscriber_count(), 0);
    }
}
