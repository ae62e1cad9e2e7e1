use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::course::model::Course;
use business::domain::shared::value_objects::Visibility;

use crate::api::catalog::dto::{
    AddImageRequest, AttachVideoRequest, AttachmentsRequest, ScopeDto,
};
use crate::api::catalog::handlers::FamilyHandlers;
use crate::api::catalog::responses::{
    AddImageResponse, AttachmentsResponse, CommandResponse, CreateResponse, UpdateResponse,
    from_error_response,
};
use crate::api::course::dto::{
    CoursePageResponse, CourseWithProductResponse, CreateCourseRequest, UpdateCourseRequest,
};
use crate::api::error::ErrorResponse;
use crate::api::tags::ApiTags;

pub struct CourseApi {
    handlers: FamilyHandlers<Course>,
}

impl CourseApi {
    pub fn new(handlers: FamilyHandlers<Course>) -> Self {
        Self { handlers }
    }
}

/// Course catalog API
///
/// Lifecycle and media endpoints for courses sold through a paired product.
#[OpenApi]
impl CourseApi {
    /// Create a course
    ///
    /// Creates an unpublished course together with its product.
    #[oai(path = "/courses", method = "post", tag = "ApiTags::Courses")]
    async fn create_course(&self, body: Json<CreateCourseRequest>) -> CreateResponse {
        let (price, draft) = body.0.into_parts();
        self.handlers.create(&price, draft).await
    }

    /// List courses
    ///
    /// Defaults to every non-deleted course, 20 per page.
    #[oai(path = "/courses", method = "get", tag = "ApiTags::Courses")]
    async fn list_courses(
        &self,
        scope: Query<Option<ScopeDto>>,
        limit: Query<Option<u32>>,
        offset: Query<Option<u32>>,
    ) -> ListCoursesResponse {
        let visibility = scope.0.map(Visibility::from).unwrap_or(Visibility::IncludingUnpublished);
        match self.handlers.list(visibility, limit.0, offset.0).await {
            Ok(page) => ListCoursesResponse::Ok(Json(page.into())),
            Err(failure) => failure.into(),
        }
    }

    /// Get a course
    ///
    /// Admin view: unpublished courses are returned too.
    #[oai(path = "/courses/:id", method = "get", tag = "ApiTags::Courses")]
    async fn get_course(&self, id: Path<String>) -> GetCourseResponse {
        match self.handlers.get(id.0, Visibility::IncludingUnpublished).await {
            Ok(sellable) => GetCourseResponse::Ok(Json(sellable.into())),
            Err(failure) => failure.into(),
        }
    }

    /// Get a published course
    #[oai(path = "/courses/:id/public", method = "get", tag = "ApiTags::Courses")]
    async fn get_published_course(&self, id: Path<String>) -> GetCourseResponse {
        match self.handlers.get(id.0, Visibility::Published).await {
            Ok(sellable) => GetCourseResponse::Ok(Json(sellable.into())),
            Err(failure) => failure.into(),
        }
    }

    /// Update a course
    ///
    /// Applies the provided fields and returns the columns that changed.
    #[oai(path = "/courses/:id", method = "patch", tag = "ApiTags::Courses")]
    async fn update_course(
        &self,
        id: Path<String>,
        body: Json<UpdateCourseRequest>,
    ) -> UpdateResponse {
        let (price, patch) = body.0.into_parts();
        self.handlers.update(id.0, price.as_deref(), patch).await
    }

    #[oai(path = "/courses/:id/publish", method = "post", tag = "ApiTags::Courses")]
    async fn publish_course(&self, id: Path<String>) -> CommandResponse {
        self.handlers.publish(&id.0).await
    }

    #[oai(path = "/courses/:id/unpublish", method = "post", tag = "ApiTags::Courses")]
    async fn unpublish_course(&self, id: Path<String>) -> CommandResponse {
        self.handlers.unpublish(&id.0).await
    }

    /// Soft-delete a course
    ///
    /// The course is unpublished first and can be restored later.
    #[oai(path = "/courses/:id", method = "delete", tag = "ApiTags::Courses")]
    async fn delete_course(&self, id: Path<String>) -> CommandResponse {
        self.handlers.delete(&id.0).await
    }

    /// Permanently delete a course
    ///
    /// Only unpublished or soft-deleted courses can be purged.
    #[oai(path = "/courses/:id/permanent", method = "delete", tag = "ApiTags::Courses")]
    async fn delete_course_permanently(&self, id: Path<String>) -> CommandResponse {
        self.handlers.delete_permanent(&id.0).await
    }

    /// Restore a soft-deleted course as unpublished
    #[oai(path = "/courses/:id/restore", method = "post", tag = "ApiTags::Courses")]
    async fn restore_course(&self, id: Path<String>) -> CommandResponse {
        self.handlers.restore(&id.0).await
    }

    /// Attach an image
    ///
    /// At most five images can be attached to a course.
    #[oai(path = "/courses/:id/images", method = "post", tag = "ApiTags::Courses")]
    async fn add_course_image(
        &self,
        id: Path<String>,
        body: Json<AddImageRequest>,
    ) -> AddImageResponse {
        self.handlers.add_image(id.0, body.0).await
    }

    #[oai(
        path = "/courses/:id/images/:media_id",
        method = "delete",
        tag = "ApiTags::Courses"
    )]
    async fn delete_course_image(
        &self,
        id: Path<String>,
        media_id: Path<String>,
    ) -> CommandResponse {
        self.handlers.delete_image(id.0, media_id.0).await
    }

    /// Attach a video
    ///
    /// Replaces the current video; attaching the same video twice is a conflict.
    #[oai(path = "/courses/:id/video", method = "put", tag = "ApiTags::Courses")]
    async fn attach_course_video(
        &self,
        id: Path<String>,
        body: Json<AttachVideoRequest>,
    ) -> CommandResponse {
        self.handlers.attach_video(id.0, body.0).await
    }

    #[oai(path = "/courses/:id/video", method = "delete", tag = "ApiTags::Courses")]
    async fn remove_course_video(&self, id: Path<String>) -> CommandResponse {
        self.handlers.remove_video(&id.0).await
    }

    /// Media attached to several courses
    ///
    /// Unknown identifiers are skipped.
    #[oai(path = "/courses/attachments", method = "post", tag = "ApiTags::Courses")]
    async fn course_attachments(&self, body: Json<AttachmentsRequest>) -> AttachmentsResponse {
        self.handlers.attachments(body.0).await
    }
}

#[derive(ApiResponse)]
pub enum GetCourseResponse {
    #[oai(status = 200)]
    Ok(Json<CourseWithProductResponse>),
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
pub enum ListCoursesResponse {
    #[oai(status = 200)]
    Ok(Json<CoursePageResponse>),
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

from_error_response!(GetCourseResponse, ListCoursesResponse);
