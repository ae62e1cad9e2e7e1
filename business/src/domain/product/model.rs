use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use uuid::Uuid;

use super::value_objects::DetailsType;
use crate::domain::shared::validation::ValidationError;

/// Generic sellable unit paired with exactly one Details record.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub price: BigDecimal,
    pub details_id: Uuid,
    pub details_type: DetailsType,
    pub in_stock: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Builds a fresh, unpublished product for a newly created Details record.
    pub fn new(
        details_id: Uuid,
        details_type: DetailsType,
        price: BigDecimal,
    ) -> Result<Self, ValidationError> {
        validate_price(&price)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            price,
            details_id,
            details_type,
            in_stock: false,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        price: BigDecimal,
        details_id: Uuid,
        details_type: DetailsType,
        in_stock: bool,
        deleted_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            price,
            details_id,
            details_type,
            in_stock,
            deleted_at,
            created_at,
            updated_at,
        }
    }
}

/// Prices are strictly positive with at most two fractional digits.
pub fn validate_price(price: &BigDecimal) -> Result<(), ValidationError> {
    if *price <= BigDecimal::zero() {
        return Err(ValidationError("product.price_not_positive"));
    }
    if price.with_scale(2) != *price {
        return Err(ValidationError("product.price_precision"));
    }
    Ok(())
}
