use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::catalog::details::Sellable;
use business::domain::catalog::use_cases::list::DetailsPage;
use business::domain::seminar::model::{NewSeminar, Seminar, SeminarPatch};

use crate::api::catalog::dto::{MediaResponse, ProductResponse};

#[derive(Debug, Clone, Object)]
pub struct CreateSeminarRequest {
    /// Decimal price, e.g. "15.00"
    pub price: String,
    pub name: String,
    pub description: String,
    pub starts_at: DateTime<Utc>,
    /// Must be later than `starts_at`
    pub ends_at: DateTime<Utc>,
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<String>,
}

impl CreateSeminarRequest {
    pub fn into_parts(self) -> (String, NewSeminar) {
        (
            self.price,
            NewSeminar {
                name: self.name,
                description: self.description,
                starts_at: self.starts_at,
                ends_at: self.ends_at,
                location: self.location,
            },
        )
    }
}

/// Schedule changes are checked against the stored dates they are merged with.
#[derive(Debug, Clone, Object)]
pub struct UpdateSeminarRequest {
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub starts_at: Option<DateTime<Utc>>,
    #[oai(skip_serializing_if_is_none)]
    pub ends_at: Option<DateTime<Utc>>,
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<String>,
}

impl UpdateSeminarRequest {
    pub fn into_parts(self) -> (Option<String>, SeminarPatch) {
        (
            self.price,
            SeminarPatch {
                name: self.name,
                description: self.description,
                starts_at: self.starts_at,
                ends_at: self.ends_at,
                location: self.location,
            },
        )
    }
}

#[derive(Debug, Clone, Object)]
pub struct SeminarResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<String>,
    pub in_stock: bool,
    #[oai(skip_serializing_if_is_none)]
    pub deleted_at: Option<DateTime<Utc>>,
    pub media: MediaResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Seminar> for SeminarResponse {
    fn from(seminar: Seminar) -> Self {
        Self {
            id: seminar.id.to_string(),
            name: seminar.name,
            description: seminar.description,
            starts_at: seminar.starts_at,
            ends_at: seminar.ends_at,
            location: seminar.location,
            in_stock: seminar.in_stock,
            deleted_at: seminar.deleted_at,
            media: seminar.media.into(),
            created_at: seminar.created_at,
            updated_at: seminar.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SeminarWithProductResponse {
    pub seminar: SeminarResponse,
    pub product: ProductResponse,
}

impl From<Sellable<Seminar>> for SeminarWithProductResponse {
    fn from(sellable: Sellable<Seminar>) -> Self {
        Self {
            seminar: sellable.details.into(),
            product: sellable.product.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SeminarPageResponse {
    pub items: Vec<SeminarResponse>,
    pub total: u64,
}

impl From<DetailsPage<Seminar>> for SeminarPageResponse {
    fn from(page: DetailsPage<Seminar>) -> Self {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            total: page.total,
        }
    }
}
