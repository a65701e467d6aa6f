pub mod bookmark;

pub use bookmark::{Bookmark, BookmarkResponse, NewBookmark};
