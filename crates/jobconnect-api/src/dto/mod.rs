//! Request and response DTOs.

pub mod request;
pub mod response;

use jobconnect_core::error::AppError;
use validator::Validate;

/// Run `validator` derive checks, flattening violations into one
/// validation error message.
pub fn validate(req: &impl Validate) -> Result<(), AppError> {
    req.validate().map_err(|errors| {
        let mut messages: Vec<String> = Vec::new();
        for (field, violations) in errors.field_errors() {
            for violation in violations {
                match &violation.message {
                    Some(message) => messages.push(message.to_string()),
                    None => messages.push(format!("Invalid value for '{field}'")),
                }
            }
        }
        messages.sort();
        AppError::validation(messages.join("; "))
    })
}
