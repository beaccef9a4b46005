//! Error types for the metadata proxy layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Outcomes a store proxy can signal to the API layer.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// The resource does not exist in the backing store.
    #[error("resource not found")]
    NotFound,

    /// The store rejected the request as malformed.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Store-side failure (connectivity, backend errors).
    #[error("proxy error: {0}")]
    Internal(String),
}

/// Result type alias for proxy operations.
pub type Result<T> = std::result::Result<T, ProxyError>;

impl IntoResponse for ProxyError {
    /// Fallback mapping for handlers that propagate with `?` instead of
    /// matching each variant. Renders a plain-text body, not the JSON
    /// envelope the explicit handler arms produce.
    fn into_response(self) -> Response {
        let status = match self {
            ProxyError::NotFound => StatusCode::NOT_FOUND,
            ProxyError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}
