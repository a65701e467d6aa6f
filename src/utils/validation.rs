use crate::error::{AppError, Result};
use serde_json::Value;
use url::Url;

/// A bookmark URL must be an absolute http(s) URL with a host.
pub fn validate_web_url(input: &str) -> Result<()> {
    let parsed = Url::parse(input)
        .map_err(|_| AppError::Validation("'url' must be a valid URL".to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
        return Err(AppError::Validation("'url' must be a valid URL".to_string()));
    }

    Ok(())
}

/// A rating must be a JSON integer between 0 and 5 inclusive.
pub fn validate_rating(value: &Value) -> Result<i64> {
    let rating = value.as_i64().ok_or_else(|| {
        AppError::Validation("'rating' must be a number between 0 and 5".to_string())
    })?;

    if !(0..=5).contains(&rating) {
        return Err(AppError::Validation(
            "'rating' must be a number between 0 and 5".to_string(),
        ));
    }

    Ok(rating)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_web_url() {
        // valid web URLs
        assert!(validate_web_url("https://example.com").is_ok());
        assert!(validate_web_url("http://example.com/path?query=1").is_ok());
        assert!(validate_web_url("https://sub.domain.co.uk/a/b").is_ok());

        // invalid web URLs
        assert!(validate_web_url("not-a-url").is_err());
        assert!(validate_web_url("example.com").is_err());
        assert!(validate_web_url("ftp://example.com/file").is_err());
        assert!(validate_web_url("mailto:user@example.com").is_err());
        assert!(validate_web_url("").is_err());
    }

    #[test]
    fn test_validate_rating() {
        // whole range is valid, including zero
        for rating in 0..=5 {
            assert_eq!(validate_rating(&json!(rating)).unwrap(), rating);
        }

        // out of range
        assert!(validate_rating(&json!(-1)).is_err());
        assert!(validate_rating(&json!(6)).is_err());

        // wrong types
        assert!(validate_rating(&json!(4.5)).is_err());
        assert!(validate_rating(&json!("4")).is_err());
        assert!(validate_rating(&json!(null)).is_err());
    }
}
