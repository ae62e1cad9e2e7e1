use poem_openapi::{ApiResponse, payload::Json};

use super::dto::{CreatedResponse, ImageResponse, OwnerAttachmentsResponse, UpdateOutcomeResponse};
use crate::api::error::ErrorResponse;

/// Routes an error body to the response variant of its status code.
///
/// Every listed enum carries the `BadRequest`, `NotFound`, `Conflict`,
/// `UnprocessableEntity` and `InternalError` variants.
macro_rules! from_error_response {
    ($($response:ty),+ $(,)?) => {
        $(
            impl
                From<(
                    poem::http::StatusCode,
                    poem_openapi::payload::Json<$crate::api::error::ErrorResponse>,
                )> for $response
            {
                fn from(
                    (status, json): (
                        poem::http::StatusCode,
                        poem_openapi::payload::Json<$crate::api::error::ErrorResponse>,
                    ),
                ) -> Self {
                    match status.as_u16() {
                        400 => Self::BadRequest(json),
                        404 => Self::NotFound(json),
                        409 => Self::Conflict(json),
                        422 => Self::UnprocessableEntity(json),
                        _ => Self::InternalError(json),
                    }
                }
            }
        )+
    };
}

pub(crate) use from_error_response;

#[derive(ApiResponse)]
pub enum CreateResponse {
    #[oai(status = 201)]
    Created(Json<CreatedResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum UpdateResponse {
    #[oai(status = 200)]
    Ok(Json<UpdateOutcomeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// State transitions and detachments with no body on success.
#[derive(ApiResponse)]
pub enum CommandResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum AddImageResponse {
    #[oai(status = 201)]
    Created(Json<ImageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum AttachmentsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OwnerAttachmentsResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

from_error_response!(
    CreateResponse,
    UpdateResponse,
    CommandResponse,
    AddImageResponse,
    AttachmentsResponse,
);
