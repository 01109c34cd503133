//! HTTP server for confdiff.
//!
//! Exposes the permalink API used to share comparisons: save a pair of
//! config texts, get back a short id and URL, load the pair again later.
//! Requests can be gated by a shared API key.

pub mod auth;
pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use auth::{AllowAllAuth, ApiKeyAuth, AuthProvider, API_KEY_HEADER};
pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use handler::{AppState, SavePermalinkRequest, SavePermalinkResponse};
pub use server::ConfdiffServer;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use tower::util::ServiceExt;

    use super::*;

    fn test_app(config: ServerConfig) -> Router {
        router::build_router(Arc::new(AppState::new(config)))
    }

    fn save_request(api_key: Option<&str>) -> Request<Body> {
        let body = serde_json::json!({ "text1": "A=1\nB=2", "text2": "A=1\nB=3" });
        let mut builder = Request::builder()
            .method("POST")
            .uri("/v1/permalinks")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(key) = api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        builder
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let app = test_app(ServerConfig::default());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn info_endpoint() {
        let app = test_app(ServerConfig::default());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/info")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["name"], "confdiff-server");
        assert!(body["max_permalinks"].is_u64());
    }

    #[tokio::test]
    async fn save_then_load_roundtrip() {
        let app = test_app(ServerConfig::default());

        let response = app.clone().oneshot(save_request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let saved = json_body(response).await;
        let id = saved["id"].as_str().unwrap().to_string();
        assert_eq!(id.len(), confdiff_store::ID_LENGTH);
        assert!(saved["url"].as_str().unwrap().contains(&id));

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/v1/permalinks/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let loaded = json_body(response).await;
        assert_eq!(loaded["text1"], "A=1\nB=2");
        assert_eq!(loaded["text2"], "A=1\nB=3");
    }

    #[tokio::test]
    async fn load_missing_returns_not_found() {
        let app = test_app(ServerConfig::default());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/permalinks/unknown1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_body(response).await;
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn api_key_guards_permalink_routes() {
        let config = ServerConfig {
            api_key: Some("sekret".to_string()),
            ..ServerConfig::default()
        };
        let app = test_app(config);

        let response = app.clone().oneshot(save_request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .clone()
            .oneshot(save_request(Some("wrong")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app.oneshot(save_request(Some("sekret"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_stays_open_with_api_key() {
        let config = ServerConfig {
            api_key: Some("sekret".to_string()),
            ..ServerConfig::default()
        };
        let app = test_app(config);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn full_store_answers_insufficient_storage() {
        let config = ServerConfig {
            max_permalinks: 0,
            ..ServerConfig::default()
        };
        let app = test_app(config);

        let response = app.oneshot(save_request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INSUFFICIENT_STORAGE);

        let body = json_body(response).await;
        assert_eq!(body["error"], "storage_full");
    }
}
