use crate::http::AppState;
use crate::hub::HubHandle;
use crate::registry::ChannelHandle;
use axum::Json;
use axum::extract::ws::rejection::WebSocketUpgradeRejection;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State, WebSocketUpgrade};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use vigil_core::ChannelId;

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized - Invalid or missing token";

#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    pub token: Option<String>,
}

/// Upgrade endpoint. The token is checked before anything about the
/// upgrade itself, so a rejected client never reaches the hub.
pub async fn ws_handler(
    State(state): State<AppState>,
    query: Result<Query<TokenQuery>, QueryRejection>,
    ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
) -> Response {
    let token = query.ok().and_then(|Query(q)| q.token);

    if !state.config.authorize(token.as_deref()) {
        warn!("Rejected WebSocket upgrade: invalid or missing token");
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": UNAUTHORIZED_MESSAGE })),
        )
            .into_response();
    }

    match ws {
        Ok(ws) => {
            let hub = state.hub.clone();
            ws.on_upgrade(move |socket| handle_socket(socket, hub))
        }
        Err(rejection) => rejection.into_response(),
    }
}

async fn handle_socket(socket: WebSocket, hub: HubHandle) {
    let channel_id = ChannelId::new();
    info!("New WebSocket connection: {}", channel_id);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    if let Err(e) = hub
        .register(channel_id, ChannelHandle::new(channel_id, tx))
        .await
    {
        error!("Could not register {}: {}", channel_id, e);
        return;
    }

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let hub = hub.clone();

        async move {
            while let Some(frame) = receiver.next().await {
                match frame {
                    Ok(Message::Text(text)) => {
                        if let Err(e) = hub.dispatch(channel_id, text).await {
                            error!("Hub died: {}", e);
                            break;
                        }
                    }
                    Ok(Message::Binary(data)) => {
                        debug!(
                            "Ignoring {} byte binary frame from {}",
                            data.len(),
                            channel_id.short()
                        );
                    }
                    Ok(Message::Close(_)) => break,
                    Ok(_) => {}
                    Err(e) => {
                        warn!("Transport error on {}: {}", channel_id, e);
                        break;
                    }
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    if let Err(e) = hub.unregister(channel_id).await {
        error!("Could not unregister {}: {}", channel_id, e);
    }
    info!("WebSocket disconnected: {}", channel_id);
}
