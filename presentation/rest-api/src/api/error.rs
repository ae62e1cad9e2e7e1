use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::catalog::errors::CatalogError;
use business::domain::errors::ErrorKind;
use business::domain::media::errors::AttachmentError;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Status code and error name for a business error kind.
pub fn classify(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::InvalidArgument => (StatusCode::BAD_REQUEST, "ValidationError"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
        ErrorKind::OwnerNotFound => (StatusCode::NOT_FOUND, "OwnerNotFound"),
        ErrorKind::ImageNotFoundOnOwner => (StatusCode::NOT_FOUND, "ImageNotFoundOnOwner"),
        ErrorKind::VideoInUse => (StatusCode::CONFLICT, "VideoInUse"),
        ErrorKind::ImageLimitExceeded => (StatusCode::UNPROCESSABLE_ENTITY, "ImageLimitExceeded"),
        ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
    }
}

fn respond(kind: ErrorKind, message: String) -> (StatusCode, Json<ErrorResponse>) {
    let (status, name) = classify(kind);
    if status.is_server_error() {
        tracing::error!(error = %message, "request failed");
    }

    (
        status,
        Json(ErrorResponse {
            name: name.to_string(),
            message,
        }),
    )
}

/// Validation failure raised by the transport itself, before any use case runs.
pub fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    respond(ErrorKind::InvalidArgument, message.to_string())
}

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        respond(self.kind(), self.to_string())
    }
}

impl IntoErrorResponse for AttachmentError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        respond(self.kind(), self.to_string())
    }
}
