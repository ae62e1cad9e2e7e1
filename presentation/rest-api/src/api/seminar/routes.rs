use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::seminar::model::Seminar;
use business::domain::shared::value_objects::Visibility;

use crate::api::catalog::dto::{
    AddImageRequest, AttachVideoRequest, AttachmentsRequest, ScopeDto,
};
use crate::api::catalog::handlers::FamilyHandlers;
use crate::api::catalog::responses::{
    AddImageResponse, AttachmentsResponse, CommandResponse, CreateResponse, UpdateResponse,
    from_error_response,
};
use crate::api::seminar::dto::{
    CreateSeminarRequest, SeminarPageResponse, SeminarWithProductResponse, UpdateSeminarRequest,
};
use crate::api::error::ErrorResponse;
use crate::api::tags::ApiTags;

pub struct SeminarApi {
    handlers: FamilyHandlers<Seminar>,
}

impl SeminarApi {
    pub fn new(handlers: FamilyHandlers<Seminar>) -> Self {
        Self { handlers }
    }
}

/// Seminar catalog API
///
/// Seminars are scheduled events; the schedule is validated on create and update.
#[OpenApi]
impl SeminarApi {
    /// Create a seminar
    ///
    /// `ends_at` must be later than `starts_at`.
    #[oai(path = "/seminars", method = "post", tag = "ApiTags::Seminars")]
    async fn create_seminar(&self, body: Json<CreateSeminarRequest>) -> CreateResponse {
        let (price, draft) = body.0.into_parts();
        self.handlers.create(&price, draft).await
    }

    /// List seminars
    #[oai(path = "/seminars", method = "get", tag = "ApiTags::Seminars")]
    async fn list_seminars(
        &self,
        scope: Query<Option<ScopeDto>>,
        limit: Query<Option<u32>>,
        offset: Query<Option<u32>>,
    ) -> ListSeminarsResponse {
        let visibility = scope.0.map(Visibility::from).unwrap_or(Visibility::IncludingUnpublished);
        match self.handlers.list(visibility, limit.0, offset.0).await {
            Ok(page) => ListSeminarsResponse::Ok(Json(page.into())),
            Err(failure) => failure.into(),
        }
    }

    /// Get a seminar, unpublished ones included
    #[oai(path = "/seminars/:id", method = "get", tag = "ApiTags::Seminars")]
    async fn get_seminar(&self, id: Path<String>) -> GetSeminarResponse {
        match self.handlers.get(id.0, Visibility::IncludingUnpublished).await {
            Ok(sellable) => GetSeminarResponse::Ok(Json(sellable.into())),
            Err(failure) => failure.into(),
        }
    }

    /// Get a published seminar
    #[oai(path = "/seminars/:id/public", method = "get", tag = "ApiTags::Seminars")]
    async fn get_published_seminar(&self, id: Path<String>) -> GetSeminarResponse {
        match self.handlers.get(id.0, Visibility::Published).await {
            Ok(sellable) => GetSeminarResponse::Ok(Json(sellable.into())),
            Err(failure) => failure.into(),
        }
    }

    /// Update a seminar
    ///
    /// The merged schedule must still end after it starts.
    #[oai(path = "/seminars/:id", method = "patch", tag = "ApiTags::Seminars")]
    async fn update_seminar(
        &self,
        id: Path<String>,
        body: Json<UpdateSeminarRequest>,
    ) -> UpdateResponse {
        let (price, patch) = body.0.into_parts();
        self.handlers.update(id.0, price.as_deref(), patch).await
    }

    #[oai(path = "/seminars/:id/publish", method = "post", tag = "ApiTags::Seminars")]
    async fn publish_seminar(&self, id: Path<String>) -> CommandResponse {
        self.handlers.publish(&id.0).await
    }

    #[oai(path = "/seminars/:id/unpublish", method = "post", tag = "ApiTags::Seminars")]
    async fn unpublish_seminar(&self, id: Path<String>) -> CommandResponse {
        self.handlers.unpublish(&id.0).await
    }

    #[oai(path = "/seminars/:id", method = "delete", tag = "ApiTags::Seminars")]
    async fn delete_seminar(&self, id: Path<String>) -> CommandResponse {
        self.handlers.delete(&id.0).await
    }

    /// Permanently delete an unpublished or soft-deleted seminar
    #[oai(path = "/seminars/:id/permanent", method = "delete", tag = "ApiTags::Seminars")]
    async fn delete_seminar_permanently(&self, id: Path<String>) -> CommandResponse {
        self.handlers.delete_permanent(&id.0).await
    }

    /// Restore a soft-deleted seminar
    #[oai(path = "/seminars/:id/restore", method = "post", tag = "ApiTags::Seminars")]
    async fn restore_seminar(&self, id: Path<String>) -> CommandResponse {
        self.handlers.restore(&id.0).await
    }

    #[oai(path = "/seminars/:id/images", method = "post", tag = "ApiTags::Seminars")]
    async fn add_seminar_image(
        &self,
        id: Path<String>,
        body: Json<AddImageRequest>,
    ) -> AddImageResponse {
        self.handlers.add_image(id.0, body.0).await
    }

    #[oai(
        path = "/seminars/:id/images/:media_id",
        method = "delete",
        tag = "ApiTags::Seminars"
    )]
    async fn delete_seminar_image(
        &self,
        id: Path<String>,
        media_id: Path<String>,
    ) -> CommandResponse {
        self.handlers.delete_image(id.0, media_id.0).await
    }

    /// Attach or replace the seminar video
    #[oai(path = "/seminars/:id/video", method = "put", tag = "ApiTags::Seminars")]
    async fn attach_seminar_video(
        &self,
        id: Path<String>,
        body: Json<AttachVideoRequest>,
    ) -> CommandResponse {
        self.handlers.attach_video(id.0, body.0).await
    }

    #[oai(path = "/seminars/:id/video", method = "delete", tag = "ApiTags::Seminars")]
    async fn remove_seminar_video(&self, id: Path<String>) -> CommandResponse {
        self.handlers.remove_video(&id.0).await
    }

    #[oai(path = "/seminars/attachments", method = "post", tag = "ApiTags::Seminars")]
    async fn seminar_attachments(&self, body: Json<AttachmentsRequest>) -> AttachmentsResponse {
        self.handlers.attachments(body.0).await
    }
}

#[derive(ApiResponse)]
pub enum GetSeminarResponse {
    #[oai(status = 200)]
    Ok(Json<SeminarWithProductResponse>),
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
pub enum ListSeminarsResponse {
    #[oai(status = 200)]
    Ok(Json<SeminarPageResponse>),
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

from_error_response!(GetSeminarResponse, ListSeminarsResponse);
