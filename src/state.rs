use crate::{
    config::Config,
    services::{BookmarkService, Database},
};

/// Shared application state, cloned into every handler via `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,

    /// Database connection pool
    pub db: Database,

    /// Bookmark persistence service
    pub bookmark_service: BookmarkService,
}
