//! HTTP server: router, shared state and lifecycle.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Request},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::Key;
use docket_core::Tracker;
use log::{info, warn};
use tokio::{net::TcpListener, signal};

use crate::config::ServerConfig;

pub mod flash;
pub mod pages;
pub mod routes;

use pages::{MarkdownRenderer, PageRenderer};

/// State shared by all handlers. Holds no mutable data: each request opens
/// its own database connection through the tracker.
#[derive(Clone)]
pub struct AppState {
    pub tracker: Tracker,
    pub key: Key,
    pub renderer: Arc<dyn PageRenderer>,
}

impl AppState {
    pub fn new(tracker: Tracker, key: Key) -> Self {
        Self {
            tracker,
            key,
            renderer: Arc::new(MarkdownRenderer),
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/create/", get(routes::create_form).post(routes::create))
        .route("/{id}/do/", post(routes::mark_done))
        .route("/{id}/undo", post(routes::mark_undone))
        .route("/{id}/undo/", post(routes::mark_undone))
        .route("/{id}/edit/", get(routes::edit_form).post(routes::edit))
        .route("/{id}/delete/", post(routes::delete))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    info!("{method} {uri} -> {}", response.status());
    response
}

/// Run the server until Ctrl+C or SIGTERM.
pub async fn run_server(tracker: Tracker, config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::new(tracker, config.cookie_key());
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Starting docket on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
