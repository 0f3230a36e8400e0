//! HTTP surface: upgrade endpoint, status endpoint and static assets.
//!
//! - `GET {ws_path}` (default `/ws`): signaling channel, token-gated
//! - `GET /status`: channel and role counts
//! - everything else: files under `public_dir`

use crate::config::{STATUS_PATH, ServerConfig};
use crate::hub::{HubHandle, HubStats};
use crate::signaling::ws_handler;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub hub: HubHandle,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Spawns the hub described by `config.hub`.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            hub: HubHandle::spawn(config.hub.clone()),
            config: Arc::new(config),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.public_dir).append_index_html_on_directories(true);

    Router::new()
        .route(&state.config.ws_path, get(ws_handler))
        .route(STATUS_PATH, get(status))
        .fallback_service(assets)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(
            "Signaling server listening on http://{} (ws path {})",
            addr, state.config.ws_path
        );
    }

    let app = build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

async fn status(State(state): State<AppState>) -> Response {
    match state.hub.stats().await {
        Ok(stats) => Json::<HubStats>(stats).into_response(),
        Err(e) => {
            error!("Status unavailable: {}", e);
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        }
    }
}
