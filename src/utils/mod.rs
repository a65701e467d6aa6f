pub mod middleware;
pub mod sanitize;
pub mod validation;
