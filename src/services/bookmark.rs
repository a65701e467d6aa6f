use crate::{
    error::Result,
    models::bookmark::{Bookmark, NewBookmark},
    services::Database,
};
use std::sync::Arc;
use tracing::debug;

/// Thin pass-through persistence layer for bookmarks. No business rules
/// live here; validation happens in the router before anything is written.
#[derive(Clone)]
pub struct BookmarkService {
    db: Arc<Database>,
}

impl BookmarkService {
    pub async fn new(db: Arc<Database>) -> Result<Self> {
        Ok(Self { db })
    }

    pub async fn list_bookmarks(&self) -> Result<Vec<Bookmark>> {
        let bookmarks = sqlx::query_as::<_, Bookmark>(
            "SELECT id, title, url, description, rating FROM bookmarks ORDER BY id",
        )
        .fetch_all(&self.db.pool)
        .await?;

        Ok(bookmarks)
    }

    pub async fn find_bookmark(&self, id: i64) -> Result<Option<Bookmark>> {
        let bookmark = sqlx::query_as::<_, Bookmark>(
            "SELECT id, title, url, description, rating FROM bookmarks WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db.pool)
        .await?;

        Ok(bookmark)
    }

    pub async fn insert_bookmark(&self, new_bookmark: NewBookmark) -> Result<Bookmark> {
        debug!("Inserting bookmark titled '{}'", new_bookmark.title);

        let bookmark = sqlx::query_as::<_, Bookmark>(
            "INSERT INTO bookmarks (title, url, description, rating)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, url, description, rating",
        )
        .bind(new_bookmark.title)
        .bind(new_bookmark.url)
        .bind(new_bookmark.description)
        .bind(new_bookmark.rating)
        .fetch_one(&self.db.pool)
        .await?;

        Ok(bookmark)
    }

    /// Delete by id, returning the affected-row count.
    pub async fn delete_bookmark(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(&self.db.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
