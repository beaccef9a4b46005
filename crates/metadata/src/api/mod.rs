//! HTTP surface: route table and shared handler state.

use crate::proxy::ProxyClient;
use axum::response::IntoResponse;
use axum::{Json, Router, routing::get};
use serde_json::json;
use std::sync::Arc;

pub mod badge;
pub mod feature;
pub mod tag;

/// State injected into every handler via `Extension<Arc<ApiState>>`.
pub struct ApiState {
    pub proxy: Arc<dyn ProxyClient>,
}

/// Build the full route table. The caller attaches state with
/// `.layer(Extension(state))`.
pub fn router() -> Router {
    Router::new()
        .route("/healthcheck", get(healthcheck))
        .merge(feature::router())
}

async fn healthcheck() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}
