use anyhow::Result;
use axum::{
    extract::Path,
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use error_responder::api::handle_app_errors;
use error_responder::catalog::{MessageCatalog, StaticCatalog};
use error_responder::config::Config;
use error_responder::errors::{AppError, ErrorResponder, FieldError};

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }

    info!("Starting graceful shutdown...");
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Smoke endpoint raising one error per category, for poking the responder
/// with curl.
async fn raise(Path(category): Path<String>) -> Result<Json<Value>, AppError> {
    match category.as_str() {
        "not-found" => Err(AppError::NotFound("error.not_found".into())),
        "access-denied" => Err(AppError::AccessDenied("error.access_denied".into())),
        "forbidden" => Err(AppError::Forbidden("error.forbidden".into())),
        "validation" => Err(AppError::ValidationFailed(vec![
            FieldError::new("name", "error.name_blank"),
            FieldError::new("age", "error.age_negative"),
        ])),
        "application" => Err(AppError::Application("error.internal".into())),
        "unknown" => Err(AppError::Unknown("something unexpected happened".into())),
        _ => Ok(Json(json!({ "category": category, "raised": false }))),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,error_responder=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let catalog: Arc<dyn MessageCatalog> = match &config.locale.catalog_path {
        Some(path) => {
            info!(path = %path, "Loading message catalog");
            Arc::new(StaticCatalog::from_file(path)?)
        }
        None => Arc::new(StaticCatalog::new()),
    };

    let responder = Arc::new(ErrorResponder::new(
        catalog,
        config.locale.default_locale.clone(),
    ));

    let app = Router::new()
        .route("/health", get(health))
        .route("/errors/:category", get(raise))
        .layer(middleware::from_fn_with_state(
            responder.clone(),
            handle_app_errors,
        ))
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
