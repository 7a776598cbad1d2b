//! Router assembly: park routes, common routes, CORS and request tracing.

mod common;
mod parks;

pub use common::common_routes;
pub use parks::park_routes;

use crate::config::ServerSettings;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    http::{header, Method, Uri},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Full application router. Cross-origin access is limited to `server.cors_origin`.
pub fn app(state: AppState, server: &ServerSettings) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(server.cors_origin.clone())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .merge(park_routes(state.clone()))
        .merge(common_routes(state))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
