//! WebSocket handler for chat clients.

use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{broadcast::error::RecvError, mpsc};
use tracing::{debug, error, info, warn};

use crate::i18n::Language;
use crate::server::AppState;
use crate::translation;

use super::events::{
    ClientFrame, RelayError, SendMessage, ServerEvent, TranslatedMessage, SEND_MESSAGE,
};

/// Size of the per-connection buffer for replies addressed to one client.
const REPLY_BUFFER_SIZE: usize = 16;

static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// WebSocket upgrade handler.
///
/// GET /ws
pub async fn ws_handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_connection(socket, state))
}

async fn handle_connection(socket: WebSocket, state: AppState) {
    let conn_id = NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed);
    let (mut sender, mut receiver) = socket.split();

    let mut broadcasts = state.hub.subscribe();
    let (reply_tx, mut reply_rx) = mpsc::channel::<ServerEvent>(REPLY_BUFFER_SIZE);

    info!(
        "Client {} connected ({} clients)",
        conn_id,
        state.hub.subscriber_count()
    );

    let send_task = tokio::spawn(async move {
        loop {
            let event = tokio::select! {
                Some(event) = reply_rx.recv() => event,
                result = broadcasts.recv() => match result {
                    Ok(event) => event,
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("Client {} lagged, skipped {} broadcasts", conn_id, skipped);
                        continue;
                    }
                    Err(RecvError::Closed) => break,
                },
            };

            let json = match serde_json::to_string(&event) {
                Ok(j) => j,
                Err(e) => {
                    warn!("Failed to serialize event: {}", e);
                    continue;
                }
            };
            if sender.send(Message::Text(json)).await.is_err() {
                break;
            }
        }
    });

    while let Some(msg_result) = receiver.next().await {
        match msg_result {
            Ok(Message::Text(text)) => {
                if let Some(reply) = process_frame(&state, &text).await {
                    if reply_tx.send(reply).await.is_err() {
                        break;
                    }
                }
            }
            Ok(Message::Binary(_)) => {
                debug!("Received binary frame from client {}, ignoring", conn_id);
            }
            Ok(Message::Close(_)) => break,
            // Ping/pong are answered by the protocol layer
            Ok(_) => {}
            Err(e) => {
                debug!("WebSocket error from client {}: {}", conn_id, e);
                break;
            }
        }
    }

    send_task.abort();
    info!("Client {} disconnected", conn_id);
}

/// Interpret one text frame.
///
/// Successful messages are broadcast through the hub; the returned event, if
/// any, is a reply for the sending client alone.
pub async fn process_frame(state: &AppState, text: &str) -> Option<ServerEvent> {
    let frame: ClientFrame = match serde_json::from_str(text) {
        Ok(frame) => frame,
        Err(e) => {
            warn!("Failed to parse client frame: {} - {}", e, text);
            return Some(ServerEvent::translation_failed(&RelayError::InvalidPayload(
                e.to_string(),
            )));
        }
    };

    match frame.event.as_str() {
        SEND_MESSAGE => match handle_send_message(state, frame.data).await {
            Ok(message) => {
                let reached = state.hub.broadcast(ServerEvent::ReceiveMessage(message));
                state.metrics.record_broadcast();
                debug!("Broadcast translation to {} clients", reached);
                None
            }
            Err(e) => {
                error!("Error during translation: {}", e);
                Some(ServerEvent::translation_failed(&e))
            }
        },
        other => {
            debug!("Ignoring unknown event '{}'", other);
            None
        }
    }
}

/// Validate a `send_message` payload and translate it.
pub async fn handle_send_message(
    state: &AppState,
    data: Value,
) -> Result<TranslatedMessage, RelayError> {
    if data.is_null() {
        return Err(RelayError::EmptyMessage);
    }

    let payload: SendMessage =
        serde_json::from_value(data).map_err(|e| RelayError::InvalidPayload(e.to_string()))?;

    let original_text = payload
        .message
        .filter(|m| !m.is_empty())
        .ok_or(RelayError::EmptyMessage)?;

    let target_language = match payload
        .target_language
        .as_deref()
        .filter(|t| !t.trim().is_empty())
    {
        Some(requested) => Language::parse(requested)
            .map_err(|e| RelayError::UnsupportedLanguage(e.to_string()))?,
        None => state.config.default_target_language,
    };

    info!("Received message: {}", original_text);

    let translated_text = translation::translate_text(
        &state.client,
        &state.config,
        &original_text,
        target_language,
        &state.metrics,
    )
    .await?;

    info!("Translated text ({}): {}", target_language, translated_text);

    Ok(TranslatedMessage {
        original_text,
        translated_text,
        target_language: target_language.code().to_string(),
    })
}
