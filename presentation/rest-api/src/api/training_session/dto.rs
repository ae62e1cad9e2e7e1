use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::catalog::details::Sellable;
use business::domain::catalog::use_cases::list::DetailsPage;
use business::domain::training_session::model::{
    NewTrainingSession, TrainingSession, TrainingSessionPatch,
};

use crate::api::catalog::dto::{MediaResponse, ProductResponse};

#[derive(Debug, Clone, Object)]
pub struct CreateTrainingSessionRequest {
    /// Decimal price, e.g. "120.00"
    pub price: String,
    pub name: String,
    pub description: String,
    /// Session length in minutes (15 to 600)
    pub duration_minutes: i32,
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<String>,
}

impl CreateTrainingSessionRequest {
    pub fn into_parts(self) -> (String, NewTrainingSession) {
        (
            self.price,
            NewTrainingSession {
                name: self.name,
                description: self.description,
                duration_minutes: self.duration_minutes,
                location: self.location,
            },
        )
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateTrainingSessionRequest {
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub duration_minutes: Option<i32>,
    /// An empty string clears the location
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<String>,
}

impl UpdateTrainingSessionRequest {
    pub fn into_parts(self) -> (Option<String>, TrainingSessionPatch) {
        (
            self.price,
            TrainingSessionPatch {
                name: self.name,
                description: self.description,
                duration_minutes: self.duration_minutes,
                location: self.location,
            },
        )
    }
}

#[derive(Debug, Clone, Object)]
pub struct TrainingSessionResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration_minutes: i32,
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<String>,
    pub in_stock: bool,
    #[oai(skip_serializing_if_is_none)]
    pub deleted_at: Option<DateTime<Utc>>,
    pub media: MediaResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TrainingSession> for TrainingSessionResponse {
    fn from(session: TrainingSession) -> Self {
        Self {
            id: session.id.to_string(),
            name: session.name,
            description: session.description,
            duration_minutes: session.duration_minutes,
            location: session.location,
            in_stock: session.in_stock,
            deleted_at: session.deleted_at,
            media: session.media.into(),
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct TrainingSessionWithProductResponse {
    pub training_session: TrainingSessionResponse,
    pub product: ProductResponse,
}

impl From<Sellable<TrainingSession>> for TrainingSessionWithProductResponse {
    fn from(sellable: Sellable<TrainingSession>) -> Self {
        Self {
            training_session: sellable.details.into(),
            product: sellable.product.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct TrainingSessionPageResponse {
    pub items: Vec<TrainingSessionResponse>,
    pub total: u64,
}

impl From<DetailsPage<TrainingSession>> for TrainingSessionPageResponse {
    fn from(page: DetailsPage<TrainingSession>) -> Self {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            total: page.total,
        }
    }
}
