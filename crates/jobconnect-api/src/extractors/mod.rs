//! Custom Axum extractors.

pub mod auth;
pub mod pagination;

pub use auth::{AuthAccount, AuthEmployer, AuthJobSeeker, OptionalAuthAccount};
pub use pagination::PaginationParams;
