//! Axum seam for the error responder.
//!
//! Handlers stay infallible from axum's point of view: a returned
//! [`AppError`] rides the response extensions behind a placeholder status
//! until [`handle_app_errors`] replaces it with the translated reply.
//! Axum's own rejections (405, 415, router 404, unreadable bodies) never
//! carry the extension and flow through untouched.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::errors::{AppError, ErrorResponder, RequestContext};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Placeholder only; rewritten by handle_app_errors
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(self);
        response
    }
}

/// Middleware translating stashed [`AppError`]s into error replies.
///
/// The request context is snapshotted before the inner service runs, since
/// the request is consumed by it.
pub async fn handle_app_errors(
    State(responder): State<Arc<ErrorResponder>>,
    request: Request,
    next: Next,
) -> Response {
    let ctx = RequestContext::from_request(&request, responder.default_locale());
    let mut response = next.run(request).await;
    match response.extensions_mut().remove::<AppError>() {
        Some(err) => responder.respond(Some(&ctx), &err).into_response(),
        None => response,
    }
}
