//! Structured error handling for API responses

pub mod category;
pub mod responder;
pub mod response;

pub use category::{AppError, FieldError, FrameworkError, RaisedError};
pub use responder::{ErrorResponder, RequestContext};
pub use response::{ErrorReply, ErrorResource};
