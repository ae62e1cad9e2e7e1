use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use poem::http::StatusCode;
use poem_openapi::{Enum, Object, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::catalog::use_cases::create::CreatedSellable;
use business::domain::catalog::use_cases::update::UpdateOutcome;
use business::domain::media::model::{Image, MediaAttachments, NewImage};
use business::domain::media::use_cases::attachments::OwnerAttachments;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::Visibility;

use crate::api::error::{ErrorResponse, bad_request};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum ScopeDto {
    #[oai(rename = "published")]
    Published,
    #[oai(rename = "including_unpublished")]
    IncludingUnpublished,
    #[oai(rename = "including_deleted")]
    IncludingDeleted,
}

impl From<ScopeDto> for Visibility {
    fn from(scope: ScopeDto) -> Self {
        match scope {
            ScopeDto::Published => Visibility::Published,
            ScopeDto::IncludingUnpublished => Visibility::IncludingUnpublished,
            ScopeDto::IncludingDeleted => Visibility::IncludingDeleted,
        }
    }
}

/// Prices travel as decimal strings so no precision is lost in JSON.
pub fn parse_price(raw: &str) -> Result<BigDecimal, (StatusCode, Json<ErrorResponse>)> {
    BigDecimal::from_str(raw.trim()).map_err(|_| bad_request("product.invalid_price"))
}

pub fn parse_optional_price(
    raw: Option<&str>,
) -> Result<Option<BigDecimal>, (StatusCode, Json<ErrorResponse>)> {
    raw.map(parse_price).transpose()
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Decimal price, two fractional digits at most
    pub price: String,
    /// Details family the product is paired with
    pub details_type: String,
    /// Whether the product is published
    pub in_stock: bool,
    #[oai(skip_serializing_if_is_none)]
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            price: product.price.to_string(),
            details_type: product.details_type.to_string(),
            in_stock: product.in_stock,
            deleted_at: product.deleted_at,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ImageResponse {
    pub media_id: String,
    pub url: String,
    pub secure_url: String,
    pub public_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<Image> for ImageResponse {
    fn from(image: Image) -> Self {
        Self {
            media_id: image.media_id,
            url: image.url,
            secure_url: image.secure_url,
            public_id: image.public_id,
            created_at: image.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MediaResponse {
    pub uploaded_image_count: u32,
    pub images: Vec<ImageResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub video_id: Option<String>,
}

impl From<MediaAttachments> for MediaResponse {
    fn from(media: MediaAttachments) -> Self {
        Self {
            uploaded_image_count: media.uploaded_image_count,
            images: media.images.into_iter().map(Into::into).collect(),
            video_id: media.video.map(|video| video.as_str().to_string()),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreatedResponse {
    pub details_id: String,
    pub product_id: String,
}

impl From<CreatedSellable> for CreatedResponse {
    fn from(created: CreatedSellable) -> Self {
        Self {
            details_id: created.details_id.to_string(),
            product_id: created.product_id.to_string(),
        }
    }
}

/// Columns changed by an update, keyed by column name.
#[derive(Debug, Clone, Object)]
pub struct UpdateOutcomeResponse {
    pub changed: bool,
    pub details: serde_json::Value,
    pub product: serde_json::Value,
}

impl From<UpdateOutcome> for UpdateOutcomeResponse {
    fn from(outcome: UpdateOutcome) -> Self {
        Self {
            changed: !outcome.is_empty(),
            details: serde_json::to_value(&outcome.details).unwrap_or_default(),
            product: serde_json::to_value(&outcome.product).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddImageRequest {
    /// Identifier assigned by the media-management service
    pub media_id: String,
    pub url: String,
    pub secure_url: String,
    pub public_id: String,
}

impl From<AddImageRequest> for NewImage {
    fn from(request: AddImageRequest) -> Self {
        Self {
            media_id: request.media_id,
            url: request.url,
            secure_url: request.secure_url,
            public_id: request.public_id,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AttachVideoRequest {
    /// Identifier of a video known to the media-management service
    pub video_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct AttachmentsRequest {
    pub owner_ids: Vec<String>,
}

#[derive(Debug, Clone, Object)]
pub struct OwnerAttachmentsResponse {
    pub owner_id: String,
    pub images: Vec<ImageResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub video_id: Option<String>,
}

impl From<OwnerAttachments> for OwnerAttachmentsResponse {
    fn from(attachments: OwnerAttachments) -> Self {
        Self {
            owner_id: attachments.owner_id.to_string(),
            images: attachments.images.into_iter().map(Into::into).collect(),
            video_id: attachments.video.map(|video| video.as_str().to_string()),
        }
    }
}
