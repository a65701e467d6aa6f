use crate::{routes, state::AppState, utils};
use axum::{
    http::Method,
    middleware,
    routing::{get, Router},
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Assemble the full application router. Kept separate from `main` so the
/// integration tests can drive the exact middleware stack that ships.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .nest("/bookmarks", routes::bookmarks::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            utils::middleware::require_bearer_token,
        ))
        .layer(middleware::from_fn(
            utils::middleware::security_headers_middleware,
        ))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> &'static str {
    "Hello, world!"
}

async fn health_check() -> &'static str {
    "Bookmarks server is running!"
}
