use crate::{
    error::{AppError, Result},
    models::bookmark::{Bookmark, BookmarkResponse, NewBookmark},
    state::AppState,
    utils::validation::{validate_rating, validate_web_url},
};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

const REQUIRED_FIELDS: [&str; 3] = ["title", "url", "rating"];

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_bookmarks).post(create_bookmark))
        .route("/:id", get(get_bookmark).delete(delete_bookmark))
}

/// Shared lookup used by both per-resource handlers, so GET and DELETE
/// agree on what a missing bookmark looks like.
async fn lookup_bookmark(state: &AppState, id: i64) -> Result<Bookmark> {
    state
        .bookmark_service
        .find_bookmark(id)
        .await?
        .ok_or_else(|| {
            warn!("Bookmark with id {} not found", id);
            AppError::NotFound("Bookmark Not Found".to_string())
        })
}

/// List all bookmarks
/// GET /bookmarks
async fn list_bookmarks(State(state): State<Arc<AppState>>) -> Result<Json<Vec<BookmarkResponse>>> {
    debug!("Listing all bookmarks");

    let bookmarks = state.bookmark_service.list_bookmarks().await?;

    Ok(Json(
        bookmarks.into_iter().map(BookmarkResponse::from).collect(),
    ))
}

/// Create a bookmark
/// POST /bookmarks
async fn create_bookmark(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse> {
    for field in REQUIRED_FIELDS {
        if body.get(field).map_or(true, Value::is_null) {
            warn!("'{}' is required", field);
            return Err(AppError::Validation(format!("'{}' is required", field)));
        }
    }

    let title = match body.get("title").and_then(Value::as_str) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => return Err(AppError::Validation("'title' is required".to_string())),
    };

    let rating = validate_rating(&body["rating"])?;

    let url = match body.get("url").and_then(Value::as_str) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => return Err(AppError::Validation("'url' is required".to_string())),
    };
    validate_web_url(&url)?;

    let description = body
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);

    let bookmark = state
        .bookmark_service
        .insert_bookmark(NewBookmark {
            title,
            url,
            description,
            rating,
        })
        .await?;

    info!("Bookmark with id {} created", bookmark.id);

    let location = format!("/bookmarks/{}", bookmark.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(BookmarkResponse::from(bookmark)),
    ))
}

/// Fetch a single bookmark
/// GET /bookmarks/:id
async fn get_bookmark(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<BookmarkResponse>> {
    debug!("Fetching bookmark with id {}", id);

    let bookmark = lookup_bookmark(&state, id).await?;

    Ok(Json(BookmarkResponse::from(bookmark)))
}

/// Delete a bookmark
/// DELETE /bookmarks/:id
async fn delete_bookmark(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    debug!("Deleting bookmark with id {}", id);

    lookup_bookmark(&state, id).await?;
    state.bookmark_service.delete_bookmark(id).await?;

    info!("Bookmark with id {} deleted", id);

    Ok(StatusCode::NO_CONTENT)
}
