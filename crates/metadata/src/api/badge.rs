//! Badge management shared across resource kinds.

use crate::error::ProxyError;
use crate::models::ResourceType;
use crate::proxy::ProxyClient;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::sync::Arc;

/// Badge put/delete logic shared by every resource endpoint.
///
/// Callers are responsible for having a `category` in hand; it is mandatory
/// on both paths.
pub struct BadgeCommon {
    client: Arc<dyn ProxyClient>,
}

impl BadgeCommon {
    #[must_use]
    pub fn new(client: Arc<dyn ProxyClient>) -> Self {
        Self { client }
    }

    pub async fn put(
        &self,
        id: &str,
        resource_type: ResourceType,
        badge_name: &str,
        category: &str,
    ) -> Response {
        match self
            .client
            .add_badge(id, resource_type, badge_name, category)
            .await
        {
            Ok(()) => {
                tracing::info!(id, badge_name, category, "badge added");
                (
                    StatusCode::OK,
                    Json(json!({
                        "message": format!(
                            "The badge {badge_name} with category {category} for id {id} and \
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
        badge_name: &str,
        category: &str,
    ) -> Response {
        match self
            .client
            .delete_badge(id, resource_type, badge_name, category)
            .await
        {
            Ok(()) => {
                tracing::info!(id, badge_name, category, "badge deleted");
                (
                    StatusCode::OK,
                    Json(json!({
                        "message": format!(
                            "The badge {badge_name} with category {category} for id {id} and \
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
