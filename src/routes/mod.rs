//! HTTP routes for Mocknest
//!
//! This module defines all HTTP endpoints exposed by the mock server.

pub mod blob;
pub mod capital;
pub mod health;

use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the main application router
///
/// Routes are matched top-down with no implicit fallthrough; anything
/// unmatched yields 404.
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/test/blob", get(blob::get_blob).put(blob::put_blob))
        .route(
            "/test/capital/:country",
            get(capital::get_capital)
                .put(capital::put_capital)
                .delete(capital::delete_capital),
        )
        // Global middleware (applied to all routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
