use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structured error body returned to the caller.
///
/// Immutable once constructed and fully determined by the request snapshot,
/// the error, and the resolved message. Built fresh per error and discarded
/// with the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResource {
    /// Request target path, empty if no request context was available
    pub url: String,
    /// Request HTTP verb, empty if no request context was available
    pub method: String,
    /// Stable identifier of the error category
    pub exception_class: String,
    /// Raw or localized error message
    pub message: String,
}

/// An `ErrorResource` paired with the status code selected for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReply {
    pub status: StatusCode,
    pub resource: ErrorResource,
}

impl IntoResponse for ErrorReply {
    fn into_response(self) -> Response {
        (self.status, Json(self.resource)).into_response()
    }
}
