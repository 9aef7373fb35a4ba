//! HTTP chat endpoint
//!
//! - `POST /chat` - `{"pergunta": "..."}` → `{"resposta": "<html>", "area": ...}`
//! - `GET /health` - liveness check

mod routes;

pub use routes::{AppState, ChatReply, ChatRequest, router};

use std::net::SocketAddr;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while serving
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Serve the chat endpoint until Ctrl+C.
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!("Dr. Legal listening on {}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown requested");
        })
        .await?;

    Ok(())
}
