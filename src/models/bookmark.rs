use crate::utils::sanitize::sanitize_html;
use serde::{Deserialize, Serialize};

/// A persisted bookmark row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub rating: i64,
}

/// Fields for a bookmark insert, already validated by the router.
#[derive(Debug, Clone)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub rating: i64,
}

/// Wire representation of a bookmark. User-supplied text fields are
/// HTML-escaped and a missing description is coerced to an empty string.
#[derive(Debug, Clone, Serialize)]
pub struct BookmarkResponse {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i64,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(bookmark: Bookmark) -> Self {
        Self {
            id: bookmark.id,
            title: sanitize_html(&bookmark.title),
            url: bookmark.url,
            description: sanitize_html(bookmark.description.as_deref().unwrap_or_default()),
            rating: bookmark.rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(title: &str, description: Option<&str>) -> Bookmark {
        Bookmark {
            id: 1,
            title: title.to_string(),
            url: "https://example.com".to_string(),
            description: description.map(str::to_string),
            rating: 4,
        }
    }

    #[test]
    fn test_response_escapes_text_fields() {
        let response = BookmarkResponse::from(sample(
            "<script>window.alert(1)</script>",
            Some("<b>bold</b>"),
        ));

        assert_eq!(response.title, "&lt;script&gt;window.alert(1)&lt;/script&gt;");
        assert_eq!(response.description, "&lt;b&gt;bold&lt;/b&gt;");
        assert_eq!(response.url, "https://example.com");
        assert_eq!(response.rating, 4);
    }

    #[test]
    fn test_response_coerces_missing_description() {
        let response = BookmarkResponse::from(sample("Example", None));
        assert_eq!(response.description, "");
    }
}
