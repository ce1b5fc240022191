pub mod middleware;

pub use middleware::handle_app_errors;
