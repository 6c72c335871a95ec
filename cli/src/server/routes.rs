//! HTTP routes

use super::models::{ApiError, ChatRequest, Endpoints, HomeResponse};
use super::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use faqbot_core::{ChatAgent, ChatResponse, ErrorKind};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/test", get(liveness))
        .route("/chat", post(chat))
        .route("/chat/stream", post(chat_stream))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "FAQ Chatbot API",
        version: faqbot_core::VERSION,
        endpoints: Endpoints {
            home: "/",
            test: "/test",
            chat: "/chat",
        },
    })
}

async fn liveness() -> Json<&'static str> {
    Json("this better be working")
}

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) =
        payload.map_err(|e| ApiError::bad_request(format!("Invalid request: {}", e.body_text())))?;

    if request.message.trim().is_empty() {
        return Err(ApiError::bad_request("Message cannot be empty"));
    }

    info!(chars = request.message.chars().count(), "Chat request");

    match state.agent.chat(&request.message).await {
        Ok(answer) => Ok(Json(ChatResponse::success(answer))),
        Err(err) => {
            error!(error = %err, "Chat turn failed");
            let status = match err.kind() {
                ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
                ErrorKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            Err(ApiError::new(
                status,
                format!("Failed to generate response: {}", err),
            ))
        }
    }
}

async fn chat_stream() -> ApiError {
    ApiError::new(StatusCode::NOT_IMPLEMENTED, "Streaming not implemented yet")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use faqbot_core::error::{AgentError, LlmError, Result};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Answers by message: "slow" times out, "boom" fails upstream
    struct StubAgent;

    #[async_trait]
    impl ChatAgent for StubAgent {
        async fn chat(&self, message: &str) -> Result<String> {
            match message {
                "slow" => Err(AgentError::TurnTimeout { timeout_ms: 30_000 }.into()),
                "boom" => Err(LlmError::ApiError {
                    status: 503,
                    message: "overloaded".to_string(),
                }
                .into()),
                other => Ok(format!("You asked: {}", other)),
            }
        }

        fn agent_type(&self) -> &str {
            "stub"
        }
    }

    fn app() -> Router {
        router(AppState::new(Arc::new(StubAgent)))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_home_lists_endpoints() {
        let (status, body) = send(get_request("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "FAQ Chatbot API");
        assert_eq!(body["version"], faqbot_core::VERSION);
        assert_eq!(
            body["endpoints"],
            json!({"home": "/", "test": "/test", "chat": "/chat"})
        );
    }

    #[tokio::test]
    async fn test_liveness() {
        let (status, body) = send(get_request("/test")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("this better be working"));
    }

    #[tokio::test]
    async fn test_chat_success() {
        let (status, body) = send(post_json("/chat", r#"{"message": "hours?"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"response": "You asked: hours?"}));
    }

    #[tokio::test]
    async fn test_chat_multibyte_message() {
        let request = post_json("/chat", r#"{"message": "¿Horario? 営業時間"}"#);
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"response": "You asked: ¿Horario? 営業時間"}));
    }

    #[tokio::test]
    async fn test_chat_rejects_empty_message() {
        for message in [r#"{"message": ""}"#, r#"{"message": "   "}"#] {
            let (status, body) = send(post_json("/chat", message)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({"error": "Message cannot be empty"}));
        }
    }

    #[tokio::test]
    async fn test_chat_rejects_malformed_body() {
        let (status, body) = send(post_json("/chat", r#"{"msg": "hi"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request: "));

        let (status, _) = send(post_json("/chat", "not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_chat_failure_statuses() {
        let (status, body) = send(post_json("/chat", r#"{"message": "boom"}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Failed to generate response: "));

        let (status, _) = send(post_json("/chat", r#"{"message": "slow"}"#)).await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    }

    #[tokio::test]
    async fn test_stream_not_implemented() {
        let (status, body) = send(post_json("/chat/stream", r#"{"message": "hi"}"#)).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert_eq!(body, json!({"error": "Streaming not implemented yet"}));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let request = Request::builder()
            .uri("/test")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
