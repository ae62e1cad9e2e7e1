use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::training_session::model::TrainingSession;
use business::domain::shared::value_objects::Visibility;

use crate::api::catalog::dto::{
    AddImageRequest, AttachVideoRequest, AttachmentsRequest, ScopeDto,
};
use crate::api::catalog::handlers::FamilyHandlers;
use crate::api::catalog::responses::{
    AddImageResponse, AttachmentsResponse, CommandResponse, CreateResponse, UpdateResponse,
    from_error_response,
};
use crate::api::training_session::dto::{
    CreateTrainingSessionRequest, TrainingSessionPageResponse, TrainingSessionWithProductResponse,
    UpdateTrainingSessionRequest,
};
use crate::api::error::ErrorResponse;
use crate::api::tags::ApiTags;

pub struct TrainingSessionApi {
    handlers: FamilyHandlers<TrainingSession>,
}

impl TrainingSessionApi {
    pub fn new(handlers: FamilyHandlers<TrainingSession>) -> Self {
        Self { handlers }
    }
}

/// Training session catalog API
#[OpenApi]
impl TrainingSessionApi {
    /// Create a training session unpublished, with its product
    #[oai(path = "/training-sessions", method = "post", tag = "ApiTags::TrainingSessions")]
    async fn create_training_session(&self, body: Json<CreateTrainingSessionRequest>) -> CreateResponse {
        let (price, draft) = body.0.into_parts();
        self.handlers.create(&price, draft).await
    }

    /// List training sessions
    #[oai(path = "/training-sessions", method = "get", tag = "ApiTags::TrainingSessions")]
    async fn list_training_sessions(
        &self,
        scope: Query<Option<ScopeDto>>,
        limit: Query<Option<u32>>,
        offset: Query<Option<u32>>,
    ) -> ListTrainingSessionsResponse {
        let visibility = scope.0.map(Visibility::from).unwrap_or(Visibility::IncludingUnpublished);
        match self.handlers.list(visibility, limit.0, offset.0).await {
            Ok(page) => ListTrainingSessionsResponse::Ok(Json(page.into())),
            Err(failure) => failure.into(),
        }
    }

    /// Get a training session, unpublished ones included
    #[oai(path = "/training-sessions/:id", method = "get", tag = "ApiTags::TrainingSessions")]
    async fn get_training_session(&self, id: Path<String>) -> GetTrainingSessionResponse {
        match self.handlers.get(id.0, Visibility::IncludingUnpublished).await {
            Ok(sellable) => GetTrainingSessionResponse::Ok(Json(sellable.into())),
            Err(failure) => failure.into(),
        }
    }

    /// Get a published training session
    #[oai(path = "/training-sessions/:id/public", method = "get", tag = "ApiTags::TrainingSessions")]
    async fn get_published_training_session(&self, id: Path<String>) -> GetTrainingSessionResponse {
        match self.handlers.get(id.0, Visibility::Published).await {
            Ok(sellable) => GetTrainingSessionResponse::Ok(Json(sellable.into())),
            Err(failure) => failure.into(),
        }
    }

    /// Update a training session
    #[oai(path = "/training-sessions/:id", method = "patch", tag = "ApiTags::TrainingSessions")]
    async fn update_training_session(
        &self,
        id: Path<String>,
        body: Json<UpdateTrainingSessionRequest>,
    ) -> UpdateResponse {
        let (price, patch) = body.0.into_parts();
        self.handlers.update(id.0, price.as_deref(), patch).await
    }

    #[oai(path = "/training-sessions/:id/publish", method = "post", tag = "ApiTags::TrainingSessions")]
    async fn publish_training_session(&self, id: Path<String>) -> CommandResponse {
        self.handlers.publish(&id.0).await
    }

    #[oai(path = "/training-sessions/:id/unpublish", method = "post", tag = "ApiTags::TrainingSessions")]
    async fn unpublish_training_session(&self, id: Path<String>) -> CommandResponse {
        self.handlers.unpublish(&id.0).await
    }

    /// Soft-delete a training session
    #[oai(path = "/training-sessions/:id", method = "delete", tag = "ApiTags::TrainingSessions")]
    async fn delete_training_session(&self, id: Path<String>) -> CommandResponse {
        self.handlers.delete(&id.0).await
    }

    /// Permanently delete an unpublished or soft-deleted training session
    #[oai(path = "/training-sessions/:id/permanent", method = "delete", tag = "ApiTags::TrainingSessions")]
    async fn delete_training_session_permanently(&self, id: Path<String>) -> CommandResponse {
        self.handlers.delete_permanent(&id.0).await
    }

    #[oai(path = "/training-sessions/:id/restore", method = "post", tag = "ApiTags::TrainingSessions")]
    async fn restore_training_session(&self, id: Path<String>) -> CommandResponse {
        self.handlers.restore(&id.0).await
    }

    /// Attach an image (five at most)
    #[oai(path = "/training-sessions/:id/images", method = "post", tag = "ApiTags::TrainingSessions")]
    async fn add_session_image(
        &self,
        id: Path<String>,
        body: Json<AddImageRequest>,
    ) -> AddImageResponse {
        self.handlers.add_image(id.0, body.0).await
    }

    #[oai(
        path = "/training-sessions/:id/images/:media_id",
        method = "delete",
        tag = "ApiTags::TrainingSessions"
    )]
    async fn delete_session_image(
        &self,
        id: Path<String>,
        media_id: Path<String>,
    ) -> CommandResponse {
        self.handlers.delete_image(id.0, media_id.0).await
    }

    #[oai(path = "/training-sessions/:id/video", method = "put", tag = "ApiTags::TrainingSessions")]
    async fn attach_session_video(
        &self,
        id: Path<String>,
        body: Json<AttachVideoRequest>,
    ) -> CommandResponse {
        self.handlers.attach_video(id.0, body.0).await
    }

    #[oai(path = "/training-sessions/:id/video", method = "delete", tag = "ApiTags::TrainingSessions")]
    async fn remove_session_video(&self, id: Path<String>) -> CommandResponse {
        self.handlers.remove_video(&id.0).await
    }

    /// Media attached to several training sessions
    #[oai(path = "/training-sessions/attachments", method = "post", tag = "ApiTags::TrainingSessions")]
    async fn training_session_attachments(&self, body: Json<AttachmentsRequest>) -> AttachmentsResponse {
        self.handlers.attachments(body.0).await
    }
}

#[derive(ApiResponse)]
pub enum GetTrainingSessionResponse {
    #[oai(status = 200)]
    Ok(Json<TrainingSessionWithProductResponse>),
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
pub enum ListTrainingSessionsResponse {
    #[oai(status = 200)]
    Ok(Json<TrainingSessionPageResponse>),
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

from_error_response!(GetTrainingSessionResponse, ListTrainingSessionsResponse);
