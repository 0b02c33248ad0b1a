//! Application-wide result alias.

use crate::error::AppError;

/// Result type used throughout the JobConnect crates.
pub type AppResult<T> = Result<T, AppError>;
