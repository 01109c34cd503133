use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use confdiff_store::{InMemoryPermalinkStore, Permalink, PermalinkStore};

use crate::auth::{AllowAllAuth, ApiKeyAuth, AuthProvider, API_KEY_HEADER};
use crate::config::ServerConfig;
use crate::error::ApiError;

/// Shared state behind every request handler.
pub struct AppState {
    pub store: Arc<dyn PermalinkStore>,
    pub auth: Arc<dyn AuthProvider>,
    pub config: ServerConfig,
}

impl AppState {
    /// Build state with an in-memory store sized from the config.
    pub fn new(config: ServerConfig) -> Self {
        let store = Arc::new(InMemoryPermalinkStore::with_limits(
            config.ttl(),
            config.max_permalinks,
        ));
        Self::with_store(config, store)
    }

    /// Build state around an existing store.
    pub fn with_store(config: ServerConfig, store: Arc<dyn PermalinkStore>) -> Self {
        let auth: Arc<dyn AuthProvider> = match &config.api_key {
            Some(key) => Arc::new(ApiKeyAuth::new(key.clone())),
            None => Arc::new(AllowAllAuth),
        };
        Self {
            store,
            auth,
            config,
        }
    }
}

/// Body of a save request.
#[derive(Debug, Serialize, Deserialize)]
pub struct SavePermalinkRequest {
    pub text1: String,
    pub text2: String,
}

/// Body of a successful save response.
#[derive(Debug, Serialize, Deserialize)]
pub struct SavePermalinkResponse {
    pub id: String,
    pub url: String,
}

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Info handler: server identity and permalink limits.
pub async fn info_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "name": "confdiff-server",
        "version": env!("CARGO_PKG_VERSION"),
        "permalink_ttl_secs": state.config.permalink_ttl_secs,
        "max_permalinks": state.config.max_permalinks,
    }))
}

/// Save a pair of config texts and answer with the share id and URL.
pub async fn save_permalink_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<SavePermalinkRequest>,
) -> Result<Json<SavePermalinkResponse>, ApiError> {
    check_auth(&state, &headers)?;

    let id = state.store.save(&request.text1, &request.text2)?;
    tracing::debug!(id = %id, "saved permalink");

    let url = state.config.permalink_url(&id);
    Ok(Json(SavePermalinkResponse { id, url }))
}

/// Load a previously saved comparison by id.
pub async fn load_permalink_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Permalink>, ApiError> {
    check_auth(&state, &headers)?;

    let permalink = state
        .store
        .load(&id)?
        .ok_or_else(|| ApiError::NotFound(id.clone()))?;
    Ok(Json(permalink))
}

fn check_auth(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let presented = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
    if state.auth.check(presented) {
        Ok(())
    } else {
        Err(ApiError::Unauthorized)
    }
}
