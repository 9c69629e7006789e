use axum::{
    Json,
    body::Body,
    extract::{Multipart, Path, State, multipart::MultipartRejection},
    http::{StatusCode, header},
    response::Response,
};
use bytes::Bytes;
use tracing::{error, info};

use crate::{
    adapters::inbound::http::{
        dto::{BucketItemDto, GatewayResponseDto},
        router::AppState,
    },
    domain::{models::UploadedFile, value_objects::ObjectKey},
};

/// Multipart field carrying the uploaded file
pub const FILE_FIELD: &str = "file";

pub const UPLOAD_SUCCESS_MESSAGE: &str = "File was successfully uploaded";
pub const MISSING_FILE_MESSAGE: &str = "there is no uploaded file associated with the given key";
pub const MISSING_FILENAME_MESSAGE: &str = "The name of the file to be deleted was not provided.";

type ErrorResponse = (StatusCode, Json<GatewayResponseDto>);

fn error_response(status: StatusCode, msg: impl Into<String>) -> ErrorResponse {
    (status, Json(GatewayResponseDto::failure(msg)))
}

/// Handle bucket listing
pub async fn list_files(
    State(app_state): State<AppState>,
) -> Result<Json<GatewayResponseDto>, ErrorResponse> {
    let file_service = &app_state.file_service;

    let items = file_service.list_files().await.map_err(|e| {
        let msg = format!(
            "Couldn't list objects in bucket {}. Reason: {}",
            file_service.bucket(),
            e
        );
        error!("{}", msg);
        error_response(StatusCode::INTERNAL_SERVER_ERROR, msg)
    })?;

    Ok(Json(GatewayResponseDto::listing(
        items.into_iter().map(BucketItemDto::from).collect(),
    )))
}

/// Handle a multipart file upload
pub async fn upload_file(
    State(app_state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<GatewayResponseDto>, ErrorResponse> {
    let mut multipart = multipart
        .map_err(|rejection| error_response(StatusCode::BAD_REQUEST, rejection.body_text()))?;

    let file = read_file_field(&mut multipart).await?;

    app_state
        .file_service
        .upload_file(file)
        .await
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(GatewayResponseDto::success(UPLOAD_SUCCESS_MESSAGE)))
}

/// Pull the first `file` field that carries a filename out of the form
async fn read_file_field(multipart: &mut Multipart) -> Result<UploadedFile, ErrorResponse> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| error_response(e.status(), e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        // A `file` part without a filename is a plain form value, not a file
        let Some(filename) = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
        else {
            continue;
        };

        let content = field
            .bytes()
            .await
            .map_err(|e| error_response(e.status(), e.body_text()))?;

        return Ok(UploadedFile::new(filename, content));
    }

    Err(error_response(StatusCode::BAD_REQUEST, MISSING_FILE_MESSAGE))
}

/// Handle file download as an attachment
pub async fn download_file(
    State(app_state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response<Body>, ErrorResponse> {
    let file_service = &app_state.file_service;
    info!("User requested to download file: {}", filename);

    let payload = file_service
        .download_file(&ObjectKey::new(filename.clone()))
        .await
        .map_err(|e| {
            let msg = format!(
                "Couldn't download file {} from bucket {}. Reason: {}.",
                filename,
                file_service.bucket(),
                e
            );
            error!("{}", msg);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, msg)
        })?;

    info!("Sending {} ({} bytes)", payload.key, payload.size());

    attachment_response(payload.key.as_str(), payload.content).map_err(|e| {
        let msg = format!(
            "Couldn't prepare file {} for download. Reason: {}.",
            filename, e
        );
        error!("{}", msg);
        error_response(StatusCode::INTERNAL_SERVER_ERROR, msg)
    })
}

fn attachment_response(filename: &str, content: Bytes) -> Result<Response<Body>, http::Error> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .header(header::CONTENT_DISPOSITION, content_disposition(filename))
        .body(Body::from(content))
}

/// `Content-Disposition` value naming the downloaded file
pub fn content_disposition(filename: &str) -> String {
    let escaped = filename.replace('\\', "\\\\").replace('"', "\\\"");
    format!("attachment; filename=\"{}\"", escaped)
}

/// Handle file deletion.
///
/// Every outcome is answered with 200; failures are flagged in the body only.
pub async fn delete_file(
    State(app_state): State<AppState>,
    Path(filename): Path<String>,
) -> (StatusCode, Json<GatewayResponseDto>) {
    delete_named_file(&app_state, filename).await
}

/// Handle `DELETE /`, a deletion request that names no file
pub async fn delete_without_name(
    State(app_state): State<AppState>,
) -> (StatusCode, Json<GatewayResponseDto>) {
    delete_named_file(&app_state, String::new()).await
}

async fn delete_named_file(
    app_state: &AppState,
    filename: String,
) -> (StatusCode, Json<GatewayResponseDto>) {
    if filename.is_empty() {
        return (
            StatusCode::OK,
            Json(GatewayResponseDto::failure(MISSING_FILENAME_MESSAGE)),
        );
    }

    info!("User requested to delete file: {}", filename);

    match app_state
        .file_service
        .delete_file(&ObjectKey::new(filename.clone()))
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(GatewayResponseDto::success(format!(
                "File ({}) has been deleted",
                filename
            ))),
        ),
        Err(e) => {
            let msg = format!("File {} could not be deleted. Reason: {}", filename, e);
            error!("{}", msg);
            (StatusCode::OK, Json(GatewayResponseDto::failure(msg)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_plain_name() {
        assert_eq!(
            content_disposition("report.txt"),
            "attachment; filename=\"report.txt\""
        );
    }

    #[test]
    fn test_content_disposition_escapes_quotes() {
        assert_eq!(
            content_disposition("say \"hi\".txt"),
            "attachment; filename=\"say \\\"hi\\\".txt\""
        );
    }

    #[test]
    fn test_attachment_response_rejects_control_characters() {
        assert!(attachment_response("bad\nname", Bytes::new()).is_err());
    }

    #[test]
    fn test_attachment_response_headers() {
        let response = attachment_response("a.bin", Bytes::from_static(b"xyz")).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/octet-stream"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"a.bin\""
        );
    }
}
