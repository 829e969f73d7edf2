//! # Flasky Web Library
//!
//! Exposes the Axum router and modules so integration tests can create
//! an in-process shell without requiring `cargo run` in another terminal.

pub mod api;
pub mod config;
pub mod models;
pub mod routes;
pub mod views;

use axum::{Extension, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::ApiClient;

/// Build the Axum router with all views and middleware.
///
/// The caller provides the backend client; this function does NOT start a
/// server.
pub fn create_app(api: ApiClient) -> Router {
    Router::new()
        .merge(routes::router())
        .layer(Extension(api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
