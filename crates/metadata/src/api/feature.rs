//! Resource handlers for the feature entity.
//!
//! Each handler parses request arguments, delegates to the store proxy (or a
//! shared tag/badge helper), and maps the outcome to a status code and JSON
//! body. The `feature_uri` path segment is percent-encoded by clients since
//! feature URIs contain slashes.

use crate::api::ApiState;
use crate::api::badge::BadgeCommon;
use crate::api::tag::{TAG_TYPE_DEFAULT, TAG_TYPE_OWNER, TagCommon};
use crate::error::ProxyError;
use crate::models::ResourceType;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Extension, Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

pub fn router() -> Router {
    Router::new()
        .route("/feature/{feature_uri}", get(get_feature))
        .route(
            "/feature/{feature_uri}/description",
            get(get_description).put(put_description),
        )
        .route(
            "/feature/{feature_uri}/tag/{tag}",
            put(put_tag).delete(delete_tag),
        )
        .route(
            "/feature/{feature_uri}/badge/{badge}",
            put(put_badge).delete(delete_badge),
        )
        // Declared but not yet backed by the store; kept in the route table
        // so the API surface stays discoverable.
        .route("/feature/{feature_uri}/lineage", get(get_lineage))
        .route("/feature/{feature_uri}/stats", get(get_stats))
        .route(
            "/feature/{feature_uri}/generation_code",
            get(get_generation_code),
        )
        .route("/feature/{feature_uri}/sample_data", get(get_sample_data))
        .route(
            "/feature/{feature_uri}/owner/{owner}",
            put(put_owner).delete(delete_owner),
        )
}

async fn get_feature(
    Extension(state): Extension<Arc<ApiState>>,
    Path(feature_uri): Path<String>,
) -> Response {
    match state.proxy.get_feature(&feature_uri).await {
        Ok(feature) => (StatusCode::OK, Json(feature)).into_response(),
        Err(ProxyError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": format!("feature_uri {feature_uri} does not exist")})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": format!("Internal server error: {e}")})),
        )
            .into_response(),
    }
}

async fn get_description(
    Extension(state): Extension<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Response {
    match state
        .proxy
        .get_resource_description(ResourceType::Feature, &id)
        .await
    {
        Ok(description) => {
            (StatusCode::OK, Json(json!({"description": description}))).into_response()
        }
        Err(ProxyError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": format!("feature_uri {id} does not exist")})),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "Internal server error"})),
        )
            .into_response(),
    }
}

#[derive(Debug, Deserialize)]
struct PutDescriptionRequest {
    #[serde(default)]
    description: Option<String>,
}

/// Unlike the GET path, non-NotFound store failures here propagate to the
/// [`ProxyError`] responder instead of being mapped to a JSON 500. Callers
/// relying on the JSON envelope get it only from GET.
async fn put_description(
    Extension(state): Extension<Arc<ApiState>>,
    Path(id): Path<String>,
    Json(req): Json<PutDescriptionRequest>,
) -> Result<Response, ProxyError> {
    let description = req.description.unwrap_or_default();
    match state
        .proxy
        .put_resource_description(ResourceType::Feature, &id, &description)
        .await
    {
        Ok(()) => Ok(StatusCode::OK.into_response()),
        Err(ProxyError::NotFound) => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({"message": format!("table_uri {id} does not exist")})),
        )
            .into_response()),
        Err(e) => Err(e),
    }
}

#[derive(Debug, Deserialize)]
struct TagParams {
    #[serde(default = "default_tag_type")]
    tag_type: String,
}

fn default_tag_type() -> String {
    TAG_TYPE_DEFAULT.to_string()
}

async fn put_tag(
    Extension(state): Extension<Arc<ApiState>>,
    Path((id, tag)): Path<(String, String)>,
    Query(params): Query<TagParams>,
) -> Response {
    let tag_type = params.tag_type;
    if tag_type == TAG_TYPE_OWNER {
        return (
            StatusCode::CONFLICT,
            Json(json!({
                "message": format!(
                    "The tag {tag} for id {id} with type {tag_type} and resource_type {} is \
                     not added successfully because owner tags are not editable",
                    ResourceType::Feature.name()
                )
            })),
        )
            .into_response();
    }

    TagCommon::new(state.proxy.clone())
        .put(&id, ResourceType::Feature, &tag, &tag_type)
        .await
}

async fn delete_tag(
    Extension(state): Extension<Arc<ApiState>>,
    Path((id, tag)): Path<(String, String)>,
    Query(params): Query<TagParams>,
) -> Response {
    let tag_type = params.tag_type;
    if tag_type == TAG_TYPE_OWNER {
        return (
            StatusCode::CONFLICT,
            Json(json!({
                "message": format!(
                    "The tag {tag} for id {id} with type {tag_type} and resource_type {} is \
                     not deleted because owner tags are not editable",
                    ResourceType::Feature.name()
                )
            })),
        )
            .into_response();
    }

    TagCommon::new(state.proxy.clone())
        .delete(&id, ResourceType::Feature, &tag, &tag_type)
        .await
}

#[derive(Debug, Deserialize)]
struct BadgeParams {
    // Mandatory: a missing category is rejected by query extraction before
    // the store is reached.
    category: String,
}

async fn put_badge(
    Extension(state): Extension<Arc<ApiState>>,
    Path((id, badge)): Path<(String, String)>,
    Query(params): Query<BadgeParams>,
) -> Response {
    BadgeCommon::new(state.proxy.clone())
        .put(&id, ResourceType::Feature, &badge, &params.category)
        .await
}

async fn delete_badge(
    Extension(state): Extension<Arc<ApiState>>,
    Path((id, badge)): Path<(String, String)>,
    Query(params): Query<BadgeParams>,
) -> Response {
    BadgeCommon::new(state.proxy.clone())
        .delete(&id, ResourceType::Feature, &badge, &params.category)
        .await
}

fn not_implemented(what: &str) -> Response {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({"message": format!("{what} is not implemented")})),
    )
        .into_response()
}

async fn get_lineage(Path(_feature_uri): Path<String>) -> Response {
    not_implemented("feature lineage")
}

async fn get_stats(Path(_feature_uri): Path<String>) -> Response {
    not_implemented("feature stats")
}

async fn get_generation_code(Path(_feature_uri): Path<String>) -> Response {
    not_implemented("feature generation code")
}

async fn get_sample_data(Path(_feature_uri): Path<String>) -> Response {
    not_implemented("feature sample data")
}

async fn put_owner(Path((_feature_uri, _owner)): Path<(String, String)>) -> Response {
    not_implemented("feature owner update")
}

async fn delete_owner(Path((_feature_uri, _owner)): Path<(String, String)>) -> Response {
    not_implemented("feature owner removal")
}
