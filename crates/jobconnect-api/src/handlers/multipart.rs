//! Shared multipart parsing helpers.

use axum::extract::Multipart;
use bytes::Bytes;

use jobconnect_core::error::AppError;

/// Reads the single expected file field from a multipart body.
///
/// Returns the client filename and the file contents. Non-file fields are
/// ignored; the first file field wins.
pub(crate) async fn single_file(
    mut multipart: Multipart,
    field_name: &str,
) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(field_name) {
            continue;
        }

        let filename = field
            .file_name()
            .ok_or_else(|| AppError::validation("Missing filename in upload"))?
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;

        return Ok((filename, data));
    }

    Err(AppError::validation(format!(
        "Missing '{field_name}' file field"
    )))
}
