//! Shared foundation for the JobConnect backend: unified error types,
//! configuration schemas, and common value types.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
