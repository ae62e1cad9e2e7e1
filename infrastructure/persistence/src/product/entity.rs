use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::DetailsType;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub price: BigDecimal,
    pub details_id: Uuid,
    pub details_type: String,
    pub in_stock: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let details_type = self.details_type.parse::<DetailsType>().map_err(|e| {
            tracing::error!("Product {} has corrupt details_type: {}", self.id, e);
            RepositoryError::persistence()
        })?;

        Ok(Product::from_repository(
            self.id,
            self.price,
            self.details_id,
            details_type,
            self.in_stock,
            self.deleted_at,
            self.created_at,
            self.updated_at,
        ))
    }
}
