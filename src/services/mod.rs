pub mod bookmark;
pub mod database;

pub use bookmark::BookmarkService;
pub use database::Database;
