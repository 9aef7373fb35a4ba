//! Route handlers

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use drlegal_application::RouteMessageUseCase;
use drlegal_domain::{AreaLabel, RouteKind};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Shared handler state. The router is stateless, so no locking.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<RouteMessageUseCase>,
}

impl AppState {
    pub fn new(router: RouteMessageUseCase) -> Self {
        Self {
            router: Arc::new(router),
        }
    }
}

/// Inbound message. A missing `pergunta` is routed as empty input.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub pergunta: String,
}

/// Outbound reply for the web widget.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub resposta: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<AreaLabel>,
    pub rota: RouteKind,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/health", get(health))
        .with_state(state)
}

pub(crate) async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatReply> {
    debug!("POST /chat ({} chars)", request.pergunta.chars().count());
    let routed = state.router.execute(&request.pergunta).await;
    Json(ChatReply {
        resposta: routed.payload.body_html,
        area: routed.payload.area,
        rota: routed.route,
    })
}

pub(crate) async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "dr-legal",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use drlegal_application::{NoGenerator, ResolveBodyUseCase};
    use drlegal_domain::{ContactChannel, Lexicon};

    struct StubChannel;

    impl ContactChannel for StubChannel {
        fn build_link(&self, message: &str) -> String {
            format!("https://contact.test/?text={}", message.len())
        }
    }

    fn state() -> AppState {
        let lexicon = Arc::new(Lexicon::standard().clone());
        let resolve_body = ResolveBodyUseCase::new(Arc::new(NoGenerator), lexicon.clone());
        AppState::new(RouteMessageUseCase::new(
            lexicon,
            Arc::new(StubChannel),
            resolve_body,
        ))
    }

    #[tokio::test]
    async fn test_missing_pergunta_gets_intro_menu() {
        let request: ChatRequest = serde_json::from_str("{}").unwrap();
        let Json(reply) = chat(State(state()), Json(request)).await;
        assert_eq!(reply.rota, RouteKind::IntroMenu);
        assert!(reply.resposta.contains("Dr. Legal"));
        assert!(reply.area.is_none());
    }

    #[tokio::test]
    async fn test_hot_topic_reply_carries_area() {
        let request = ChatRequest {
            pergunta: "Sofri um acidente de carro".to_string(),
        };
        let Json(reply) = chat(State(state()), Json(request)).await;
        assert_eq!(reply.rota, RouteKind::HotTopic);
        assert_eq!(reply.area.unwrap().as_str(), "Indenização");
    }

    #[tokio::test]
    async fn test_reply_serializes_with_portuguese_keys() {
        let request = ChatRequest {
            pergunta: "tchau".to_string(),
        };
        let Json(reply) = chat(State(state()), Json(request)).await;
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["rota"], "farewell");
        assert!(json.get("area").is_none());
        assert!(json["resposta"].as_str().unwrap().starts_with("Fico feliz"));
    }

    #[tokio::test]
    async fn test_health() {
        let Json(body) = health().await;
        assert_eq!(body["status"], "ok");
    }
}
