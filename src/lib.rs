// Library exports for testing
pub mod api;
pub mod catalog;
pub mod config;
pub mod errors;
