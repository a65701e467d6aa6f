use crate::{error::AppError, state::AppState};
use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::warn;

/// Bearer-token gate. Rejects any request whose `Authorization` header does
/// not match the configured API token. The health probe bypasses the gate.
pub async fn require_bearer_token(
    State(app_state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next<Body>,
) -> Result<Response, AppError> {
    let path = request.uri().path();
    if path == "/health" {
        return Ok(next.run(request).await);
    }

    let expected = format!("Bearer {}", app_state.config.api_token);
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| value == expected);

    if !authorized {
        warn!("Unauthorized request to path: {}", path);
        return Err(AppError::unauthorized("Unauthorized request"));
    }

    Ok(next.run(request).await)
}

/// Security headers on every response.
pub async fn security_headers_middleware(request: Request<Body>, next: Next<Body>) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert("x-content-type-options", HeaderValue::from_static("nosniff"));
    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
    headers.insert("x-xss-protection", HeaderValue::from_static("1; mode=block"));
    headers.insert(
        "referrer-policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    response
}
