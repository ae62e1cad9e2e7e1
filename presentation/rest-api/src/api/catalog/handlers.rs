use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::details::{Sellable, SellableDetails};
use business::domain::catalog::use_cases::create::{CreateSellableParams, CreateSellableUseCase};
use business::domain::catalog::use_cases::delete::DeleteSellableUseCase;
use business::domain::catalog::use_cases::get::{GetSellableParams, GetSellableUseCase};
use business::domain::catalog::use_cases::list::{
    DetailsPage, ListSellablesParams, ListSellablesUseCase,
};
use business::domain::catalog::use_cases::publication::PublicationUseCase;
use business::domain::catalog::use_cases::restore::RestoreSellableUseCase;
use business::domain::catalog::use_cases::update::{UpdateSellableParams, UpdateSellableUseCase};
use business::domain::media::use_cases::attachments::GetAttachmentsUseCase;
use business::domain::media::use_cases::images::{
    AddImageParams, DeleteImageParams, ImageManagerUseCase,
};
use business::domain::media::use_cases::videos::{AttachVideoParams, VideoManagerUseCase};
use business::domain::shared::value_objects::Visibility;

use super::dto::{
    AddImageRequest, AttachVideoRequest, AttachmentsRequest, parse_optional_price, parse_price,
};
use super::responses::{
    AddImageResponse, AttachmentsResponse, CommandResponse, CreateResponse, UpdateResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};

pub type Failure = (StatusCode, Json<ErrorResponse>);

/// Use cases serving one Details family, shared by that family's routes.
pub struct FamilyHandlers<D: SellableDetails> {
    pub create: Arc<dyn CreateSellableUseCase<D>>,
    pub update: Arc<dyn UpdateSellableUseCase<D>>,
    pub get: Arc<dyn GetSellableUseCase<D>>,
    pub list: Arc<dyn ListSellablesUseCase<D>>,
    pub publication: Arc<dyn PublicationUseCase>,
    pub delete: Arc<dyn DeleteSellableUseCase>,
    pub restore: Arc<dyn RestoreSellableUseCase>,
    pub images: Arc<dyn ImageManagerUseCase>,
    pub videos: Arc<dyn VideoManagerUseCase>,
    pub attachments: Arc<dyn GetAttachmentsUseCase>,
}

fn command<E: IntoErrorResponse>(result: Result<(), E>) -> CommandResponse {
    match result {
        Ok(()) => CommandResponse::NoContent,
        Err(err) => err.into_error_response().into(),
    }
}

impl<D: SellableDetails> FamilyHandlers<D> {
    pub async fn create(&self, price: &str, details: D::Draft) -> CreateResponse {
        let price = match parse_price(price) {
            Ok(price) => price,
            Err(failure) => return failure.into(),
        };

        match self
            .create
            .execute(CreateSellableParams { price, details })
            .await
        {
            Ok(created) => CreateResponse::Created(Json(created.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    pub async fn update(&self, id: String, price: Option<&str>, details: D::Patch) -> UpdateResponse {
        let price = match parse_optional_price(price) {
            Ok(price) => price,
            Err(failure) => return failure.into(),
        };

        match self
            .update
            .execute(UpdateSellableParams { id, price, details })
            .await
        {
            Ok(outcome) => UpdateResponse::Ok(Json(outcome.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    pub async fn get(&self, id: String, visibility: Visibility) -> Result<Sellable<D>, Failure> {
        self.get
            .execute(GetSellableParams { id, visibility })
            .await
            .map_err(IntoErrorResponse::into_error_response)
    }

    pub async fn list(
        &self,
        visibility: Visibility,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<DetailsPage<D>, Failure> {
        self.list
            .execute(ListSellablesParams {
                visibility,
                limit,
                offset,
            })
            .await
            .map_err(IntoErrorResponse::into_error_response)
    }

    pub async fn publish(&self, id: &str) -> CommandResponse {
        command(self.publication.publish(id).await)
    }

    pub async fn unpublish(&self, id: &str) -> CommandResponse {
        command(self.publication.unpublish(id).await)
    }

    pub async fn delete(&self, id: &str) -> CommandResponse {
        command(self.delete.delete(id).await)
    }

    pub async fn delete_permanent(&self, id: &str) -> CommandResponse {
        command(self.delete.delete_permanent(id).await)
    }

    pub async fn restore(&self, id: &str) -> CommandResponse {
        command(self.restore.execute(id).await)
    }

    pub async fn add_image(&self, owner_id: String, body: AddImageRequest) -> AddImageResponse {
        match self
            .images
            .add_image(AddImageParams {
                owner_id,
                image: body.into(),
            })
            .await
        {
            Ok(image) => AddImageResponse::Created(Json(image.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    pub async fn delete_image(&self, owner_id: String, media_id: String) -> CommandResponse {
        command(
            self.images
                .delete_image(DeleteImageParams { owner_id, media_id })
                .await,
        )
    }

    pub async fn attach_video(&self, owner_id: String, body: AttachVideoRequest) -> CommandResponse {
        command(
            self.videos
                .add(AttachVideoParams {
                    owner_id,
                    video_id: body.video_id,
                })
                .await,
        )
    }

    pub async fn remove_video(&self, owner_id: &str) -> CommandResponse {
        command(self.videos.remove(owner_id).await)
    }

    pub async fn attachments(&self, body: AttachmentsRequest) -> AttachmentsResponse {
        match self.attachments.execute(body.owner_ids).await {
            Ok(owners) => {
                AttachmentsResponse::Ok(Json(owners.into_iter().map(Into::into).collect()))
            }
            Err(err) => err.into_error_response().into(),
        }
    }
}
