use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error categories.
///
/// A closed taxonomy: every error the application raises is classified into
/// exactly one of these variants, and each variant carries only what is
/// needed to render a response. The carried message doubles as the lookup
/// key into the message catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Requested entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// Caller is not authenticated (or authentication was rejected)
    #[error("{0}")]
    AccessDenied(String),

    /// Caller is authenticated but not allowed
    #[error("{0}")]
    Forbidden(String),

    /// Request input failed validation, one entry per offending field
    #[error("validation failed for {} field(s)", .0.len())]
    ValidationFailed(Vec<FieldError>),

    /// Generic application-level failure
    #[error("{0}")]
    Application(String),

    /// Anything outside the application taxonomy
    #[error("{0}")]
    Unknown(String),
}

impl AppError {
    /// Stable identifier for the error category, exposed to clients as
    /// `exceptionClass`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::AccessDenied(_) => "ACCESS_DENIED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::ValidationFailed(_) => "VALIDATION_FAILED",
            Self::Application(_) => "APPLICATION_ERROR",
            Self::Unknown(_) => "UNKNOWN",
        }
    }

    /// HTTP status code for this error category
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AccessDenied(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            Self::Application(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A single validation failure tied to one input field.
///
/// `message` is a catalog lookup key with the raw text as its own fallback,
/// mirroring how the validation engine reports field errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Framework-level conditions that must never be translated.
///
/// These stay with the host framework's default handling; the responder
/// forwards them untouched instead of producing an [`ErrorResource`].
///
/// [`ErrorResource`]: super::ErrorResource
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameworkError {
    #[error("request method not supported: {0}")]
    MethodNotSupported(String),
    #[error("media type not supported: {0}")]
    MediaTypeNotSupported(String),
    #[error("media type not acceptable: {0}")]
    MediaTypeNotAcceptable(String),
    #[error("missing path variable: {0}")]
    MissingPathVariable(String),
    #[error("missing request parameter: {0}")]
    MissingRequestParameter(String),
    #[error("request binding failed: {0}")]
    RequestBindingFailed(String),
    #[error("conversion not supported: {0}")]
    ConversionNotSupported(String),
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
    #[error("message body not readable: {0}")]
    MessageNotReadable(String),
    #[error("message body not writable: {0}")]
    MessageNotWritable(String),
    #[error("missing multipart request part: {0}")]
    MissingRequestPart(String),
    #[error("no handler found for {0}")]
    NoHandlerFound(String),
    #[error("async request timed out: {0}")]
    AsyncRequestTimeout(String),
}

/// Everything that can reach the responder's dispatch seam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaisedError {
    App(AppError),
    Framework(FrameworkError),
}

impl From<AppError> for RaisedError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<FrameworkError> for RaisedError {
    fn from(err: FrameworkError) -> Self {
        Self::Framework(err)
    }
}
