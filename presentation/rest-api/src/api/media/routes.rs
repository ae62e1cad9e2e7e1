use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};

use business::domain::media::use_cases::images::ImageManagerUseCase;
use business::domain::media::use_cases::videos::VideoManagerUseCase;
use business::domain::product::value_objects::DetailsType;

use crate::api::catalog::responses::from_error_response;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::media::dto::{UnlinkResponse, UnlinkedOwnersResponse};
use crate::api::tags::ApiTags;

/// Attachment managers of one Details family.
pub struct FamilyMedia {
    pub details_type: DetailsType,
    pub images: Arc<dyn ImageManagerUseCase>,
    pub videos: Arc<dyn VideoManagerUseCase>,
}

pub struct MediaApi {
    families: Vec<FamilyMedia>,
}

impl MediaApi {
    pub fn new(families: Vec<FamilyMedia>) -> Self {
        Self { families }
    }
}

/// Callbacks of the media-management service
///
/// Each family is unlinked in its own transaction. A failed call can be
/// repeated: families already unlinked report no owners the second time.
#[OpenApi]
impl MediaApi {
    /// Unlink a centrally deleted image from every owner
    #[oai(
        path = "/media/images/:media_id/unlink",
        method = "post",
        tag = "ApiTags::Media"
    )]
    async fn unlink_image(&self, media_id: Path<String>) -> UnlinkMediaResponse {
        let mut unlinked = Vec::with_capacity(self.families.len());
        for family in &self.families {
            match family.images.unlink_image(&media_id.0).await {
                Ok(owner_ids) => {
                    unlinked.push(UnlinkedOwnersResponse::new(family.details_type, owner_ids))
                }
                Err(err) => return err.into_error_response().into(),
            }
        }
        UnlinkMediaResponse::Ok(Json(UnlinkResponse { unlinked }))
    }

    /// Unlink a centrally deleted video from every owner
    #[oai(
        path = "/media/videos/:video_id/unlink",
        method = "post",
        tag = "ApiTags::Media"
    )]
    async fn unlink_video(&self, video_id: Path<String>) -> UnlinkMediaResponse {
        let mut unlinked = Vec::with_capacity(self.families.len());
        for family in &self.families {
            match family.videos.unlink_video(&video_id.0).await {
                Ok(owner_ids) => {
                    unlinked.push(UnlinkedOwnersResponse::new(family.details_type, owner_ids))
                }
                Err(err) => return err.into_error_response().into(),
            }
        }
        UnlinkMediaResponse::Ok(Json(UnlinkResponse { unlinked }))
    }
}

#[derive(ApiResponse)]
pub enum UnlinkMediaResponse {
    #[oai(status = 200)]
    Ok(Json<UnlinkResponse>),
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

from_error_response!(UnlinkMediaResponse);
