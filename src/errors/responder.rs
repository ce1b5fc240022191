use axum::{
    extract::Request,
    http::{header, HeaderMap},
};
use std::sync::Arc;
use tracing::error;

use crate::catalog::MessageCatalog;

use super::category::{AppError, FieldError, FrameworkError, RaisedError};
use super::response::{ErrorReply, ErrorResource};

/// Per-request snapshot consumed by the responder.
///
/// Captured before the request is handed to the inner service so the
/// responder never has to touch live framework state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub path: String,
    pub method: String,
    pub locale: String,
}

impl RequestContext {
    pub fn new(
        path: impl Into<String>,
        method: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
            locale: locale.into(),
        }
    }

    /// Snapshot an incoming request. The locale comes from the first
    /// `Accept-Language` tag, falling back to `default_locale`.
    pub fn from_request(request: &Request, default_locale: &str) -> Self {
        let locale = locale_from_headers(request.headers())
            .unwrap_or_else(|| default_locale.to_string());
        Self {
            path: request.uri().path().to_string(),
            method: request.method().to_string(),
            locale,
        }
    }
}

/// First language tag of `Accept-Language`, quality parameters stripped.
fn locale_from_headers(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::ACCEPT_LANGUAGE)?.to_str().ok()?;
    let tag = raw.split(',').next()?.split(';').next()?.trim();
    if tag.is_empty() || tag == "*" {
        return None;
    }
    Some(tag.to_string())
}

/// Central error-to-response translator.
///
/// Stateless apart from the shared message catalog; safe to share behind an
/// `Arc` and invoke concurrently, one call per in-flight request.
pub struct ErrorResponder {
    catalog: Arc<dyn MessageCatalog>,
    default_locale: String,
}

impl ErrorResponder {
    pub fn new(catalog: Arc<dyn MessageCatalog>, default_locale: impl Into<String>) -> Self {
        Self {
            catalog,
            default_locale: default_locale.into(),
        }
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Translate an application error into a status code and error body.
    ///
    /// Infallible: a missing context degrades `url` and `method` to empty
    /// strings, and a catalog miss falls back to the raw message. Emits two
    /// error-level log records per invocation before building the resource.
    pub fn respond(&self, ctx: Option<&RequestContext>, err: &AppError) -> ErrorReply {
        let path = ctx.map(|c| c.path.clone()).unwrap_or_default();
        let method = ctx.map(|c| c.method.clone()).unwrap_or_default();
        let locale = ctx.map_or(self.default_locale.as_str(), |c| c.locale.as_str());

        error!(method = %method, uri = %path, "Request failed");
        error!("{err}");

        let message = match err {
            AppError::ValidationFailed(fields) => self.join_field_errors(fields, locale),
            // No localization for errors outside the application taxonomy
            AppError::Unknown(raw) => raw.clone(),
            AppError::NotFound(key)
            | AppError::AccessDenied(key)
            | AppError::Forbidden(key)
            | AppError::Application(key) => self.localize(key, locale),
        };

        ErrorReply {
            status: err.status_code(),
            resource: ErrorResource {
                url: path,
                method,
                exception_class: err.kind().to_string(),
                message,
            },
        }
    }

    /// Route a raised error: application errors are translated, framework
    /// conditions are returned untouched for the host framework's default
    /// handling. Pass-through performs no logging and builds no resource.
    pub fn dispatch(
        &self,
        ctx: Option<&RequestContext>,
        raised: RaisedError,
    ) -> Result<ErrorReply, FrameworkError> {
        match raised {
            RaisedError::App(err) => Ok(self.respond(ctx, &err)),
            RaisedError::Framework(err) => Err(err),
        }
    }

    /// Catalog lookup with the key itself as the fallback text.
    fn localize(&self, key: &str, locale: &str) -> String {
        self.catalog.resolve(key, locale, key)
    }

    // Every entry ends with "; ", the last one included. Long-standing
    // client-visible behavior; do not turn this into a join.
    fn join_field_errors(&self, fields: &[FieldError], locale: &str) -> String {
        let mut message = String::new();
        for field_error in fields {
            message.push_str(&self.localize(&field_error.message, locale));
            message.push_str("; ");
        }
        message
    }
}
