//! Tag management shared across resource kinds.

use crate::error::ProxyError;
use crate::models::ResourceType;
use crate::proxy::ProxyClient;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::sync::Arc;

/// User tags carry this type unless the request says otherwise.
pub const TAG_TYPE_DEFAULT: &str = "default";
/// Owner tags are derived from ownership data; writes through the tag
/// endpoint are rejected before the store is called.
pub const TAG_TYPE_OWNER: &str = "owner";

/// Tag put/delete logic shared by every resource endpoint.
///
/// Resource handlers gate owner tags themselves; by the time a request
/// reaches this helper it is a plain store write plus status mapping.
pub struct TagCommon {
    client: Arc<dyn ProxyClient>,
}

impl TagCommon {
    #[must_use]
    pub fn new(client: Arc<dyn ProxyClient>) -> Self {
        Self { client }
    }

    pub async fn put(
        &self,
        id: &str,
        resource_type: ResourceType,
        tag: &str,
        tag_type: &str,
    ) -> Response {
        match self.client.add_tag(id, resource_type, tag, tag_type).await {
            Ok(()) => {
                tracing::info!(id, tag, tag_type, "tag added");
                (
                    StatusCode::OK,
                    Json(json!({
                        "message": format!(
                            "The tag {tag} for id {id} with type {tag_type} and \
                             resource_type {} is added successfully",
                            resource_type.name()
                        )
                    })),
                )
                    .into_response()
            }
            Err(ProxyError::NotFound) => (
                StatusCode::NOT_FOUND,
                Json(json!({"message": format!("id {id} does not exist")})),
            )
                .into_response(),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": format!("Internal server error: {e}")})),
            )
                .into_response(),
        }
    }

    pub async fn delete(
        &self,
        id: &str,
        resource_type: ResourceType,
        tag: &str,
        tag_type: &str,
    ) -> Response {
        match self
            .client
            .delete_tag(id, resource_type, tag, tag_type)
            .await
        {
            Ok(()) => {
                tracing::info!(id, tag, tag_type, "tag deleted");
                (
                    StatusCode::OK,
                    Json(json!({
                        "message": format!(
                            "The tag {tag} for id {id} with type {tag_type} and \
                             resource_type {} is deleted successfully",
                            resource_type.name()
                        )
                    })),
                )
                    .into_response()
            }
            Err(ProxyError::NotFound) => (
                StatusCode::NOT_FOUND,
                Json(json!({"message": format!("id {id} does not exist")})),
            )
                .into_response(),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": format!("Internal server error: {e}")})),
            )
                .into_response(),
        }
    }
}
