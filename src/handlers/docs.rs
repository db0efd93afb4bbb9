use crate::error::AppError;
use crate::startup::AppState;
use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// Accept one uploaded source file and return generated documentation.
///
/// The file arrives in the `codeFile` field of a multipart body; other
/// fields are ignored. Its bytes are held in memory only for the duration
/// of the request.
pub async fn generate_docs(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
    })? {
        if field.name() != Some("codeFile") {
            continue;
        }

        let filename = field.file_name().unwrap_or("unnamed").to_string();

        let data = field.bytes().await.map_err(|e| {
            AppError::BadRequest(anyhow::anyhow!("Failed to read file bytes: {}", e))
        })?;

        let size = data.len();

        if size > state.config.upload.max_file_bytes {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "File too large (max {} bytes)",
                state.config.upload.max_file_bytes
            )));
        }

        // Source files are not guaranteed to be valid UTF-8; decode lossily,
        // matching how browsers read text files.
        let file_text = String::from_utf8_lossy(&data).into_owned();

        tracing::info!(
            filename = %filename,
            size = %size,
            "Documentation generation started"
        );

        let documentation = state.generator.generate(&file_text).await.map_err(|e| {
            tracing::error!(
                filename = %filename,
                error = %e,
                "Documentation generation failed"
            );
            AppError::from(e)
        })?;

        tracing::info!(
            filename = %filename,
            chars = documentation.len(),
            "Documentation generation completed"
        );

        return Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            documentation,
        )
            .into_response());
    }

    Err(AppError::BadRequest(anyhow::anyhow!("No file uploaded")))
}
